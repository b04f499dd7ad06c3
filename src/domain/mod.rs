mod access_token;
mod credentials;
mod post;

pub use access_token::{AccessToken, LoginResponse};
pub use credentials::Credentials;
pub use post::{NewPost, OwnedPost, Post, PostId};
