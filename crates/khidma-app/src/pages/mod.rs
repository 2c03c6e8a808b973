// SPDX-License-Identifier: MIT

pub mod landing;
pub mod services;
pub mod testimonials;
