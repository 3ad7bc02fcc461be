mod disposition;
mod error;

#[cfg(feature = "object-storage")]
mod object_store;

pub use disposition::attachment_disposition;
pub use error::StorageError;

#[cfg(feature = "object-storage")]
pub use object_store::{ObjectStore, StorageSettings, UploadCredentials, PRESIGN_EXPIRY_SECS};
