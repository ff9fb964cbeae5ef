use dioxus::prelude::*;

/// Arc gauge filled to `percent` (0..=100) of the sweep between the angles.
#[allow(non_snake_case)]
#[component]
pub fn Gauge(
    percent: f32,
    start_angle: f32,
    stop_angle: f32,
    size: i32,
    stroke: i32,
    track_class: String,
    progress_class: String,
    children: Element,
) -> Element {
    let pct = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let span = (stop_angle - start_angle).abs().max(0.0001);
    let end_angle = start_angle + span * (pct / 100.0);

    let c = (size as f32) / 2.0;
    let r = c - (stroke as f32) / 2.0 - 1.0;

    fn polar(cx: f32, cy: f32, r: f32, ang: f32) -> (f32, f32) {
        let rad = ang.to_radians();
        (cx + r * rad.cos(), cy + r * rad.sin())
    }
    fn arc_path(cx: f32, cy: f32, r: f32, a0: f32, a1: f32) -> String {
        let (x0, y0) = polar(cx, cy, r, a0);
        let (x1, y1) = polar(cx, cy, r, a1);
        let large_arc = if (a1 - a0).abs() >= 180.0 { 1 } else { 0 };
        let sweep = if a1 >= a0 { 1 } else { 0 };
        format!("M {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large_arc} {sweep} {x1:.3} {y1:.3}")
    }

    // 0° points right in SVG space; shift so the arc opens downwards
    let angle_offset = 90.0;
    let track_d = arc_path(c, c, r, start_angle + angle_offset, stop_angle + angle_offset);
    let progress_d = arc_path(c, c, r, start_angle + angle_offset, end_angle + angle_offset);
    // A zero-length arc still draws a round cap; hide it
    let progress_opacity = if pct > 0.0 { "1" } else { "0" };

    let view_box = format!("0 0 {size} {size}");
    let container_style = format!("width:{size}px;height:{size}px");

    rsx! {
        div { class: "relative", style: "{container_style}",
            svg { width: "{size}", height: "{size}", view_box: "{view_box}",
                path { class: "{track_class}", d: "{track_d}", fill: "none", stroke: "currentColor", stroke_width: "{stroke}", stroke_linecap: "round" }
                path { class: "{progress_class}", d: "{progress_d}", fill: "none", stroke: "currentColor", stroke_width: "{stroke}", stroke_linecap: "round", opacity: "{progress_opacity}" }
            }
            div { class: "absolute inset-0 grid place-items-center", {children} }
        }
    }
}
