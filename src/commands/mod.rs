pub mod catalog;
pub mod get;
pub mod put;
pub mod search;

/// Outcome of a command, mapped to the process exit code by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Found,
    NotFound,
}

impl Status {
    pub const NOT_FOUND_EXIT_CODE: i32 = 3;

    pub fn exit_code(self) -> i32 {
        match self {
            Status::Found => 0,
            Status::NotFound => Self::NOT_FOUND_EXIT_CODE,
        }
    }
}
