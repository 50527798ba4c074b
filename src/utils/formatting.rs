use std::time::Duration;

/// Turns a raw model id into a label fit for a dropdown: the provider path
/// prefix is cut and the remaining segments are title-cased.
/// "fal-ai/flux-pro/v1.1" becomes "V1.1", "dall-e-3" becomes "Dall E 3".
pub fn format_model_id(model_id: &str) -> String {
    let name = model_id.rsplit('/').next().unwrap_or(model_id);
    name.split(['-', '_'])
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Compact duration for metric chips: sub-second in ms, then seconds, then
/// minutes.
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        let secs = duration.as_secs_f64();
        if secs < 60.0 {
            format!("{:.2}s", secs)
        } else {
            format!("{:.1}m", secs / 60.0)
        }
    }
}

/// Stopwatch-style rendering with a fixed tenth-of-a-second precision.
pub fn format_elapsed_secs(duration: Duration) -> String {
    format!("{:.1}s", duration.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_model_id_strips_provider_path() {
        assert_eq!(format_model_id("fal-ai/flux/schnell"), "Schnell");
        assert_eq!(format_model_id("dall-e-3"), "Dall E 3");
        assert_eq!(format_model_id("flux-pro-1.1"), "Flux Pro 1.1");
        assert_eq!(format_model_id("gemini-2.5-flash-image"), "Gemini 2.5 Flash Image");
    }

    #[test]
    fn test_format_duration_picks_a_unit() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.50s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1.5m");
    }

    #[test]
    fn test_format_elapsed_secs() {
        assert_eq!(format_elapsed_secs(Duration::from_millis(1340)), "1.3s");
        assert_eq!(format_elapsed_secs(Duration::ZERO), "0.0s");
    }
}
