// SPDX-License-Identifier: MIT

pub mod view_services;
