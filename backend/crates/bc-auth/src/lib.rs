pub mod bearer;
pub mod claims;
pub mod clock;
pub mod credential_vault;
pub mod error;
pub mod session_identity;
pub mod session_issuer;

pub use bearer::parse_bearer;
pub use claims::Claims;
pub use clock::{Clock, ManualClock, SystemClock};
pub use credential_vault::CredentialVault;
pub use error::{AuthError, Result};
pub use session_identity::SessionIdentity;
pub use session_issuer::{DEFAULT_TOKEN_TTL_SECS, SessionIssuer};
