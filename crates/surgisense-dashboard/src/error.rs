use surgisense_client::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("{0} is already in progress")]
    Busy(&'static str),

    #[error("Please select a file first!")]
    NothingSelected,

    #[error(transparent)]
    Rejected(ClientError),

    /// A backend call failed. `advisory` is what the view shows the user.
    #[error("{advisory}")]
    Remote {
        advisory: String,
        #[source]
        source: ClientError,
    },
}
