//! Postman Collection v2.1.0 target schema

mod collection;
mod request;

pub use collection::{
    POSTMAN_SCHEMA_V2_1, PostmanCollection, PostmanFolder, PostmanInfo, PostmanItem,
    PostmanRequestItem, PostmanVariable,
};
pub use request::{
    PostmanAuth, PostmanAuthParam, PostmanBody, PostmanBodyOptions, PostmanHeader,
    PostmanQueryParam, PostmanRawOptions, PostmanRequest, PostmanUrl,
};
