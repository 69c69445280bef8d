use crate::server::{
    error::{
        auth::{AuthError, NOT_COURSE_AUTHOR, PERMISSION_DENIED},
        AppError,
    },
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
    model::{
        access::ContentRef,
        role::{Role, UserStatus},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod session;
