/// Catalog services
///
/// The façade between HTTP handlers and the repositories: validates
/// payloads, checks that the target exists before mutating it, and turns
/// repository errors into `ServerError`s.
pub mod albums;
pub mod songs;

pub use albums::AlbumsService;
pub use songs::SongsService;
