//! Message types compiled from proto/foo.proto by build.rs.

pub mod foo {
    include!(concat!(env!("OUT_DIR"), "/foo.rs"));
}

pub use foo::{user, SearchRequest, User};
