pub mod cursor;
pub mod deque;
pub mod vector;
