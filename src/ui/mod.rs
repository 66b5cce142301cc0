// SPDX-License-Identifier: MPL-2.0
//! UI modules: menu bar, viewer, about screen, notifications, theming.

pub mod about;
pub mod menu;
pub mod notifications;
pub mod state;
pub mod theme;
pub mod viewer;
