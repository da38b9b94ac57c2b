pub mod error;
pub mod registration;
pub mod session_cookie;
pub mod session_resolver;

pub use error::{AuthError, Result};
pub use registration::Registration;
pub use session_cookie::SessionCookie;
pub use session_resolver::SessionResolver;
