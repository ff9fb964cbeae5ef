#[cfg(feature = "web")]
fn pad2(n: i32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

#[cfg(feature = "web")]
pub fn format_local(rfc3339: &str) -> String {
    use js_sys::Date;
    let d = Date::new(&wasm_bindgen::JsValue::from_str(rfc3339));
    if d.get_time().is_nan() {
        return rfc3339.to_string();
    }
    let day = d.get_date() as i32;
    let month = (d.get_month() as i32) + 1;
    let year = d.get_full_year() as i32;
    let hour = d.get_hours() as i32;
    let minute = d.get_minutes() as i32;
    format!(
        "{}.{}.{} {}:{}",
        pad2(day),
        pad2(month),
        year,
        pad2(hour),
        pad2(minute)
    )
}

#[cfg(not(feature = "web"))]
pub fn format_local(rfc3339: &str) -> String {
    rfc3339.to_string()
}

/// AQI values are shown as whole numbers.
pub fn format_aqi(value: f64) -> String {
    if !value.is_finite() {
        return "–".to_string();
    }
    format!("{}", value.round() as i64)
}
