// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted splash session driven by timestamped events.
//!
//! This example plays back what a host would feed the splash:
//! - the loading gate opening,
//! - a tap, a drag that falls short, and a drag that dismisses the curtain,
//! - wheel and touch input flipping pages once the main content is visible.
//!
//! After each step it prints the render parameters a presentation layer would consume.
//!
//! Run:
//! - `cargo run -p curtain_demos --example scripted_session`

use core::num::NonZeroU64;

use curtain_event_state::drag::PointerId;
use curtain_splash::{RenderParams, Splash, SplashConfig, SplashEvent};
use curtain_transition::TransitionSpec;
use kurbo::{Point, Vec2};

const VIEWPORT: f64 = 800.0;

fn main() {
    let finger: PointerId = NonZeroU64::new(1).unwrap();
    let mut splash = Splash::new(SplashConfig::default(), VIEWPORT, 0);

    let script = [
        (400, SplashEvent::HostReady),
        // Too early: the loading overlay is still up.
        (
            600,
            SplashEvent::PointerDown {
                pointer: finger,
                position: Point::new(200.0, 600.0),
            },
        ),
        // A tap: prompt label and a bounce.
        (
            1_200,
            SplashEvent::PointerDown {
                pointer: finger,
                position: Point::new(200.0, 600.0),
            },
        ),
        (1_260, SplashEvent::PointerUp { pointer: finger }),
        // 120px of a 800px viewport falls short of the commit threshold.
        (
            2_000,
            SplashEvent::PointerDown {
                pointer: finger,
                position: Point::new(200.0, 600.0),
            },
        ),
        (
            2_050,
            SplashEvent::PointerMove {
                pointer: finger,
                position: Point::new(200.0, 480.0),
            },
        ),
        (2_100, SplashEvent::PointerUp { pointer: finger }),
        // 320px dismisses.
        (
            3_000,
            SplashEvent::PointerDown {
                pointer: finger,
                position: Point::new(200.0, 700.0),
            },
        ),
        (
            3_080,
            SplashEvent::PointerMove {
                pointer: finger,
                position: Point::new(200.0, 380.0),
            },
        ),
        (3_120, SplashEvent::PointerUp { pointer: finger }),
        // Navigation is ignored until the reveal completes at 5120.
        (
            4_000,
            SplashEvent::Wheel {
                delta: Vec2::new(0.0, 120.0),
            },
        ),
        (
            5_200,
            SplashEvent::Wheel {
                delta: Vec2::new(0.0, 120.0),
            },
        ),
        // Within the cooldown.
        (
            5_400,
            SplashEvent::Wheel {
                delta: Vec2::new(0.0, 120.0),
            },
        ),
        (
            6_200,
            SplashEvent::TouchStart {
                position: Point::new(300.0, 400.0),
            },
        ),
        (
            6_350,
            SplashEvent::TouchEnd {
                position: Point::new(220.0, 390.0),
            },
        ),
    ];

    print_params(0, "start", &splash.render_params());
    for (now, event) in script {
        let consumed = splash.handle(now, event);
        println!("@{now:>5}ms {event:?} -> consumed: {consumed}");
        print_params(now, "after", &splash.render_params());
    }

    // Let every remaining timer fire, as a frame loop would.
    while let Some(deadline) = splash.next_deadline() {
        if splash.advance(deadline) {
            print_params(deadline, "timer", &splash.render_params());
        }
    }

    splash.teardown();
    println!("torn down; next deadline: {:?}", splash.next_deadline());
}

fn print_params(now: u64, tag: &str, params: &RenderParams<'_>) {
    let transition = match params.transform.transition {
        TransitionSpec::None => "none".to_string(),
        spec => format!("{}ms", spec.duration_ms()),
    };
    println!(
        "  [{tag} {now}] curtain y={:.1} ({transition}) label={:?} hidden={} page={} bg=#{:06X} visible={} loading={}",
        params.transform.offset_y,
        params.label_text,
        params.label_hidden,
        params.page_index.get(),
        params.background_color.to_hex(),
        params.main_content_visible,
        params.loading,
    );
}
