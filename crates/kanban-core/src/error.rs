use thiserror::Error;

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum GatewayError {
  /// The request never completed.
  #[error("transport error: {0}")]
  Transport(String),
  #[error("{route} returned HTTP {status}")]
  Status {
    route:  String,
    status: u16
  },
  #[error("decode error: {0}")]
  Decode(String)
}

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum FormError {
  #[error("title is required")]
  MissingTitle,
  #[error("status is not one the board knows")]
  UnrecognizedStatus,
  #[error(
    "priority is not one the board knows"
  )]
  UnrecognizedPriority,
  #[error("comment is empty")]
  EmptyComment,
  #[error("no task is open")]
  NoOpenTask
}

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum SyncError {
  #[error(transparent)]
  Gateway(#[from] GatewayError),
  #[error(transparent)]
  Validation(#[from] FormError)
}
