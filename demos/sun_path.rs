use chrono::TimeZone;
use chrono_tz::America::Chicago;

use sun_path::angles::{rad_to_deg, solar_position};
use sun_path::daylight::estimate_daylight;
use sun_path::sampler::sample_path_in_zone;
use sun_path::types::{DaylightWindow, GeoCoordinate, SamplingRequest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let location = GeoCoordinate::new(39.8, -89.6);
    let noon = Chicago
        .with_ymd_and_hms(2026, 3, 21, 12, 0, 0)
        .single()
        .ok_or("ambiguous local time")?;

    let pos = solar_position(&noon, &location);
    println!("=== Solar Position ===");
    println!(
        "Location: Springfield, IL ({:.1}°N, {:.1}°W)",
        location.latitude, -location.longitude
    );
    println!("Date/Time: {}", noon);
    println!("Day of year: {}", pos.day_of_year);
    println!("Declination: {:.2}°", rad_to_deg(pos.declination));
    println!("Equation of Time: {:.2} minutes", pos.equation_of_time);
    println!("True Solar Time: {:.1} minutes", pos.true_solar_time);
    println!("Hour Angle: {:.2}°", rad_to_deg(pos.hour_angle));
    println!("Altitude: {:.2}°", rad_to_deg(pos.altitude));
    println!("Azimuth: {:.2}° (0°=N, 90°=E, 180°=S)", rad_to_deg(pos.azimuth));
    println!();

    match estimate_daylight(noon.date_naive(), &location, pos.utc_offset_minutes) {
        DaylightWindow::PolarNight => println!("Polar night"),
        DaylightWindow::PolarDay => println!("Polar day"),
        DaylightWindow::Span {
            sunrise_minutes,
            sunset_minutes,
        } => println!(
            "Sunrise {:02}:{:02}, sunset {:02}:{:02}",
            (sunrise_minutes / 60.0) as i32,
            (sunrise_minutes % 60.0) as i32,
            (sunset_minutes / 60.0) as i32,
            (sunset_minutes % 60.0) as i32
        ),
    }
    println!();

    let midnight = Chicago
        .with_ymd_and_hms(2026, 3, 21, 0, 0, 0)
        .single()
        .ok_or("ambiguous local time")?;
    let request = SamplingRequest::new(&midnight, location).with_step_minutes(30.0);
    println!("=== Sun Path ({} min step) ===", request.step_minutes);
    for sample in sample_path_in_zone(&request, Chicago)? {
        println!(
            "{}  alt {:6.2}°  az {:6.2}°",
            sample.instant.format("%H:%M %:z"),
            rad_to_deg(sample.altitude),
            rad_to_deg(sample.azimuth)
        );
    }
    Ok(())
}
