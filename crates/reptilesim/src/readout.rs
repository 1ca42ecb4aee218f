//! Display strings emitted back to the control surface.

pub fn speed_text(speed_kmh: f32) -> String {
    format!("Speed: {speed_kmh:.1} km/h")
}

pub fn ambient_text(ambient: f32) -> String {
    format!("Ambient temperature: {ambient:.1}°C")
}

pub fn body_text(body: f32) -> String {
    format!("Body temperature: {body:.1}°C")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_decimal_place() {
        assert_eq!(speed_text(4.0), "Speed: 4.0 km/h");
        assert_eq!(speed_text(0.0), "Speed: 0.0 km/h");
        assert_eq!(ambient_text(20.0), "Ambient temperature: 20.0°C");
        assert_eq!(body_text(24.96), "Body temperature: 25.0°C");
        assert_eq!(body_text(24.94), "Body temperature: 24.9°C");
    }
}
