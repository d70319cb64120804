//! Window property query functions.
//!
//! Stateless functions for deciding whether an existing top-level window can
//! be pulled into the container.

use x11rb::connection::Connection;
use x11rb::protocol::xproto::*;

/// How a candidate window may be handled by the reparenting procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Manageability {
    /// Override-redirect windows (popups, menus, etc.) are left alone.
    NotManageable,
    /// Manageable and currently mapped; must be unmapped before reparenting
    /// to avoid a visible flash.
    Mapped,
    /// Manageable and not mapped; can be reparented directly.
    Unmapped,
}

/// Query a window's attributes and classify it for reparenting.
///
/// A window whose attributes cannot be read (it may have been destroyed
/// since the tree was queried) is treated as not manageable.
pub fn manageability(conn: &impl Connection, window: Window) -> Manageability {
    let attrs = match conn.get_window_attributes(window) {
        Ok(cookie) => match cookie.reply() {
            Ok(attrs) => attrs,
            Err(_) => return Manageability::NotManageable,
        },
        Err(_) => return Manageability::NotManageable,
    };

    classify(attrs.override_redirect, attrs.map_state)
}

/// Classify a window from its raw attribute values.
///
/// Anything that is not unmapped counts as mapped, including windows that
/// are viewable only in principle (mapped but with an unmapped ancestor).
pub fn classify(override_redirect: bool, map_state: MapState) -> Manageability {
    if override_redirect {
        Manageability::NotManageable
    } else if map_state == MapState::UNMAPPED {
        Manageability::Unmapped
    } else {
        Manageability::Mapped
    }
}

/// Canonical hex form of a window ID, as compared against command-line
/// arguments.
pub fn format_window_id(window: Window) -> String {
    format!("0x{:x}", window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_redirect_is_never_manageable() {
        assert_eq!(
            classify(true, MapState::VIEWABLE),
            Manageability::NotManageable
        );
        assert_eq!(
            classify(true, MapState::UNMAPPED),
            Manageability::NotManageable
        );
        assert_eq!(
            classify(true, MapState::UNVIEWABLE),
            Manageability::NotManageable
        );
    }

    #[test]
    fn test_unmapped_window_classification() {
        assert_eq!(classify(false, MapState::UNMAPPED), Manageability::Unmapped);
    }

    #[test]
    fn test_mapped_window_classification() {
        // Both viewable and unviewable count as mapped
        assert_eq!(classify(false, MapState::VIEWABLE), Manageability::Mapped);
        assert_eq!(classify(false, MapState::UNVIEWABLE), Manageability::Mapped);
    }

    #[test]
    fn test_window_id_formatting() {
        assert_eq!(format_window_id(0x3e00001), "0x3e00001");
        assert_eq!(format_window_id(1), "0x1");
        assert_eq!(format_window_id(0xdeadbeef), "0xdeadbeef");
    }
}
