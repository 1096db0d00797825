/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod client;
mod macros;
mod parsers;
pub mod album;
pub mod auth;
pub mod errors;
pub mod gallery;
pub mod image;
pub mod properties;
pub mod rate_limit;
pub mod resolver;
pub mod upload;

pub use album::*;
pub use auth::*;
pub use client::*;
pub use errors::*;
pub use gallery::*;
pub use image::*;
pub use properties::*;
pub use rate_limit::*;
pub use resolver::*;
pub use upload::*;
