use super::*;
use crate::server::{
    error::auth::{NOT_COURSE_AUTHOR, PERMISSION_DENIED},
    model::access::ContentRef,
    service::access::AccessService,
};

mod assert_author;
mod can_read;
mod can_write;
mod require;
mod resolve_course;
