//! Icon assignment for named UI actions
//!
//! The toolbar and menu panels expose a fixed set of named action/button
//! members grouped by feature area. Each area owns a table of
//! (member, icon name) pairs; [`apply_icons`] binds the resolved icons to
//! the requested areas and leaves everything else untouched.

use serde::{Deserialize, Serialize};

use super::{IconResolver, IconSource};

/// Default pixel size for action icons.
const ACTION_ICON_SIZE: u32 = 16;

/// Feature areas whose actions carry icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconScope {
    Canvas,
    JackServer,
    Transport,
    Misc,
}

/// Something that exposes named action/button members which accept icons.
///
/// The target must expose every member its requested scopes imply; that is
/// the caller's contract, not something this module defends against.
pub trait IconTarget {
    fn set_action_icon(&mut self, member: &str, icon: &IconSource);
}

const CANVAS_ICONS: &[(&str, &str)] = &[
    ("act_canvas_arrange", "view-sort-ascending"),
    ("act_canvas_refresh", "view-refresh"),
    ("act_canvas_zoom_fit", "zoom-fit-best"),
    ("act_canvas_zoom_in", "zoom-in"),
    ("act_canvas_zoom_out", "zoom-out"),
    ("act_canvas_zoom_100", "zoom-original"),
    ("act_canvas_print", "document-print"),
    ("b_canvas_zoom_fit", "zoom-fit-best"),
    ("b_canvas_zoom_in", "zoom-in"),
    ("b_canvas_zoom_out", "zoom-out"),
    ("b_canvas_zoom_100", "zoom-original"),
];

const JACK_SERVER_ICONS: &[(&str, &str)] = &[
    ("act_jack_clear_xruns", "edit-clear"),
    ("act_jack_configure", "configure"),
    ("act_jack_render", "media-record"),
    ("b_jack_clear_xruns", "edit-clear"),
    ("b_jack_configure", "configure"),
    ("b_jack_render", "media-record"),
];

const TRANSPORT_ICONS: &[(&str, &str)] = &[
    ("act_transport_play", "media-playback-start"),
    ("act_transport_stop", "media-playback-stop"),
    ("act_transport_backwards", "media-seek-backward"),
    ("act_transport_forwards", "media-seek-forward"),
    ("b_transport_play", "media-playback-start"),
    ("b_transport_stop", "media-playback-stop"),
    ("b_transport_backwards", "media-seek-backward"),
    ("b_transport_forwards", "media-seek-forward"),
];

const MISC_ICONS: &[(&str, &str)] = &[
    ("act_quit", "application-exit"),
    ("act_configure", "configure"),
];

/// The (member, icon name) table for one feature area.
pub fn scope_table(scope: IconScope) -> &'static [(&'static str, &'static str)] {
    match scope {
        IconScope::Canvas => CANVAS_ICONS,
        IconScope::JackServer => JACK_SERVER_ICONS,
        IconScope::Transport => TRANSPORT_ICONS,
        IconScope::Misc => MISC_ICONS,
    }
}

/// Assign icons to the target's members for the requested feature areas.
///
/// Members belonging to areas not in `scopes` are left untouched.
pub fn apply_icons(target: &mut impl IconTarget, scopes: &[IconScope], resolver: &IconResolver) {
    for &scope in scopes {
        for (member, icon_name) in scope_table(scope) {
            let icon = resolver.resolve(icon_name, ACTION_ICON_SIZE);
            target.set_action_icon(member, &icon);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct RecordingTarget {
        assigned: BTreeMap<String, IconSource>,
    }

    impl IconTarget for RecordingTarget {
        fn set_action_icon(&mut self, member: &str, icon: &IconSource) {
            self.assigned.insert(member.to_string(), icon.clone());
        }
    }

    fn bundled_only_resolver() -> IconResolver {
        IconResolver::new("hicolor", Vec::new())
    }

    #[test]
    fn test_transport_scope_touches_exactly_its_eight_members() {
        let mut target = RecordingTarget::default();
        apply_icons(&mut target, &[IconScope::Transport], &bundled_only_resolver());

        assert_eq!(target.assigned.len(), 8);
        assert!(target
            .assigned
            .keys()
            .all(|member| member.contains("transport")));
    }

    #[test]
    fn test_unrequested_scopes_stay_untouched() {
        let mut target = RecordingTarget::default();
        apply_icons(&mut target, &[IconScope::Misc], &bundled_only_resolver());

        assert_eq!(target.assigned.len(), 2);
        assert!(target.assigned.contains_key("act_quit"));
        assert!(target.assigned.contains_key("act_configure"));
        assert!(!target.assigned.keys().any(|member| member.contains("canvas")));
    }

    #[test]
    fn test_icons_resolve_through_the_resolver() {
        let mut target = RecordingTarget::default();
        apply_icons(&mut target, &[IconScope::Canvas], &bundled_only_resolver());

        assert_eq!(
            target.assigned.get("act_canvas_refresh"),
            Some(&IconSource::Bundled("icons/16x16/view-refresh.png".to_string()))
        );
    }

    #[test]
    fn test_all_scopes_cover_every_member_once() {
        let mut target = RecordingTarget::default();
        apply_icons(
            &mut target,
            &[
                IconScope::Canvas,
                IconScope::JackServer,
                IconScope::Transport,
                IconScope::Misc,
            ],
            &bundled_only_resolver(),
        );
        assert_eq!(target.assigned.len(), 11 + 6 + 8 + 2);
    }
}
