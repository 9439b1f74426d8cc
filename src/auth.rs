pub mod jwt;
pub mod tokens;

pub use jwt::{AuthUser, Claims, JwtKeys};
