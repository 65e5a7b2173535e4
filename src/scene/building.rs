//! Building-entry scrollytelling scene: exterior, door approach, door opening,
//! corridor and elevator, staged over one pinned scroll range.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    animation::ease::Ease,
    foundation::core::{Property, Value},
    foundation::error::ScrubResult,
    scene::hotspot::{Hotspot, HotspotAction},
    scroll::binding::{BindOpts, ScrollBinding, bind_to_scroll},
    scroll::events::ScrollHub,
    scroll::motion::Scrub,
    scroll::sink::StyleSink,
    scroll::trigger::{PinLength, TriggerRange},
    timeline::dsl::{TimelineBuilder, Tween},
    timeline::model::{Overlap, Timeline},
};

pub const STAGE: &str = "stage";
pub const DOOR: &str = "door";
pub const DOOR_OVERLAY: &str = "door-overlay";
pub const ELEVATOR_FLOORS: &str = "elevator-floors";

/// Every element the scene animates.
pub const TARGETS: [&str; 4] = [STAGE, DOOR, DOOR_OVERLAY, ELEVATOR_FLOORS];

/// Exterior, approach/open, corridor, elevator.
pub const SCENE_COUNT: u32 = 4;
/// Smooth-scrub lag in seconds.
pub const SCRUB_LAG_SECS: f64 = 0.6;
/// Duration of the elevator floor jumps.
pub const FLOOR_TWEEN_SECS: f64 = 0.8;

/// The scene's timeline: chained `.to()` tweens with `power2.inOut` easing.
pub fn building_timeline() -> ScrubResult<Timeline> {
    TimelineBuilder::new()
        .default_ease(Ease::InOutCubic)
        .overlap(Overlap::LatestStarted)
        .label("exterior", 0.0)?
        .label("door", 0.6)?
        .label("lobby", 1.3)?
        .label("corridor", 1.9)?
        .label("elevator", 3.4)?
        .label("floors", 4.2)?
        // exterior: slight zoom in
        .tween(
            Tween::on(STAGE)
                .to(Property::Scale, 1.08)
                .to(Property::Y, Value::px(-60.0))
                .duration(1.0)
                .at(0.0),
        )
        // approach the door
        .tween(
            Tween::on(DOOR)
                .to(Property::Scale, 1.6)
                .to(Property::Y, Value::px(-30.0))
                .duration(1.0)
                .at(0.6),
        )
        // door opens: overlay fades and stops catching clicks
        .tween(
            Tween::on(DOOR_OVERLAY)
                .to(Property::Opacity, 0.0)
                .to(Property::PointerEvents, Value::keyword("none"))
                .duration(0.6)
                .at(1.3),
        )
        // camera moves into the corridor
        .tween(
            Tween::on(STAGE)
                .to(Property::X, Value::px(-220.0))
                .to(Property::Scale, 1.02)
                .duration(1.2)
                .at(1.9),
        )
        // elevator approach
        .tween(
            Tween::on(STAGE)
                .to(Property::Y, Value::px(-320.0))
                .to(Property::Scale, 1.05)
                .duration(1.0)
                .at(3.4),
        )
        .tween(
            Tween::on(ELEVATOR_FLOORS)
                .to(Property::Y, Value::percent(-200.0))
                .duration(1.0)
                .at(4.2),
        )
        .build()
}

pub fn building_hotspots() -> Vec<Hotspot> {
    let floor = |id: &str, label: &str, progress: f64| {
        Hotspot::new(
            id,
            label,
            HotspotAction::TweenToProgress {
                progress,
                duration_secs: FLOOR_TWEEN_SECS,
            },
        )
    };
    vec![
        Hotspot::new(
            "project-1",
            "Open project 1",
            HotspotAction::Navigate {
                href: "/projects/1".to_string(),
            },
        ),
        Hotspot::new(
            "project-2",
            "Open project 2",
            HotspotAction::Navigate {
                href: "/projects/2".to_string(),
            },
        ),
        floor("floor-contact", "Go to Contact", 0.9),
        floor("floor-about", "Go to About", 0.65),
        floor("floor-projects", "Go to Projects", 0.4),
    ]
}

/// Scrub and pin settings of the scene.
pub fn building_bind_opts() -> BindOpts {
    BindOpts {
        scrub: Scrub::Smooth {
            lag_secs: SCRUB_LAG_SECS,
        },
        pin: true,
    }
}

/// The assembled scene, ready to mount on a page.
#[derive(Clone, Debug)]
pub struct BuildingScene {
    timeline: Rc<Timeline>,
    range: TriggerRange,
    hotspots: Vec<Hotspot>,
}

impl BuildingScene {
    /// Build the scene for a container whose top sits at `trigger_top_px`.
    pub fn new(trigger_top_px: f64) -> ScrubResult<Self> {
        Ok(Self {
            timeline: Rc::new(building_timeline()?),
            range: TriggerRange::new(
                trigger_top_px,
                PinLength::Viewports(f64::from(SCENE_COUNT + 1)),
            ),
            hotspots: building_hotspots(),
        })
    }

    pub fn timeline(&self) -> &Rc<Timeline> {
        &self.timeline
    }

    pub fn range(&self) -> TriggerRange {
        self.range
    }

    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    pub fn hotspot(&self, id: &str) -> Option<&Hotspot> {
        self.hotspots.iter().find(|h| h.id == id)
    }

    /// Bind the scene to `hub`; dispose the returned binding on unmount.
    pub fn mount<S: StyleSink + 'static>(
        &self,
        hub: &ScrollHub,
        sink: Rc<RefCell<S>>,
    ) -> ScrollBinding {
        bind_to_scroll(
            self.timeline.clone(),
            self.range,
            hub,
            sink,
            building_bind_opts(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/building.rs"]
mod tests;
