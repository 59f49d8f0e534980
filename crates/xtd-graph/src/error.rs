#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("cannot call {operation} when either src or dst node does not exist")]
    MissingEndpoint { operation: &'static str },
    #[error("cannot call {operation} on a node that does not exist")]
    MissingNode { operation: &'static str },
}

pub type Result<T> = std::result::Result<T, GraphError>;
