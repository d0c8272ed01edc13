use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("parent node not found in tree")]
    ParentNotFound,

    #[error("parent already holds the maximum of {arity} children")]
    CapacityExceeded { arity: usize },
}

pub type TreeResult<T> = Result<T, TreeError>;
