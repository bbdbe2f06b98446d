use std::path::Path;

use super::*;

const TWO_CITIES: &str = r"
locations:
  - name: Portland, OR
    aqi: 180
    main_pollutant: PM2.5
    pollutants:
      - { name: PM2.5, value: 88.2, unit: μg/m³, level: high }
      - { name: CO, value: 1.8, unit: ppm, level: moderate }
  - name: Seattle, WA
    aqi: 38
    main_pollutant: PM2.5
";

#[test]
fn parses_locations_in_file_order() {
    let file = parse_locations(TWO_CITIES).unwrap();
    let names: Vec<&str> = file.locations.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Portland, OR", "Seattle, WA"]);
    assert_eq!(file.locations[0].pollutants.len(), 2);
    assert_eq!(file.locations[0].pollutants[1].name, Pollutant::Co);
    assert!(file.locations[1].pollutants.is_empty());
}

#[test]
fn accepts_spaced_very_high_level() {
    let yaml = r"
locations:
  - name: Delhi, IN
    aqi: 320
    main_pollutant: PM2.5
    pollutants:
      - { name: PM2.5, value: 240.0, unit: μg/m³, level: very high }
";
    let file = parse_locations(yaml).unwrap();
    assert_eq!(
        file.locations[0].pollutants[0].level,
        PollutantLevel::VeryHigh
    );
}

#[test]
fn rejects_empty_name() {
    let yaml = "locations:\n  - { name: '  ', aqi: 10, main_pollutant: O3 }\n";
    let err = parse_locations(yaml).unwrap_err();
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn rejects_duplicate_name_case_insensitively() {
    let yaml = "locations:\n  - { name: 'Austin, TX', aqi: 45, main_pollutant: O3 }\n  - { name: 'austin, tx', aqi: 50, main_pollutant: O3 }\n";
    let err = parse_locations(yaml).unwrap_err();
    assert!(err.to_string().contains("duplicate location name"));
}

#[test]
fn rejects_negative_aqi_at_parse_time() {
    let yaml = "locations:\n  - { name: 'Austin, TX', aqi: -3, main_pollutant: O3 }\n";
    let err = parse_locations(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::CatalogFileParse(_)), "got: {err:?}");
}

#[test]
fn rejects_negative_pollutant_value() {
    let yaml = r"
locations:
  - name: Austin, TX
    aqi: 45
    main_pollutant: O3
    pollutants:
      - { name: O3, value: -1.0, unit: ppb, level: low }
";
    let err = parse_locations(yaml).unwrap_err();
    assert!(err.to_string().contains("invalid O3 value"));
}

#[test]
fn rejects_repeated_pollutant() {
    let yaml = r"
locations:
  - name: Austin, TX
    aqi: 45
    main_pollutant: O3
    pollutants:
      - { name: O3, value: 30.0, unit: ppb, level: low }
      - { name: O3, value: 31.0, unit: ppb, level: low }
";
    let err = parse_locations(yaml).unwrap_err();
    assert!(err.to_string().contains("more than once"));
}

#[test]
fn rejects_unknown_pollutant_code() {
    let yaml = r"
locations:
  - name: Austin, TX
    aqi: 45
    main_pollutant: O3
    pollutants:
      - { name: NH3, value: 3.0, unit: ppb, level: low }
";
    let err = parse_locations(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::CatalogFileParse(_)));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_locations(Path::new("/definitely/not/here.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::CatalogFileIo { .. }));
}

#[test]
fn load_locations_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("locations.yaml");
    assert!(
        path.exists(),
        "locations.yaml missing at {path:?}, required for this test"
    );
    let result = load_locations(&path);
    assert!(result.is_ok(), "failed to load locations.yaml: {result:?}");
    let file = result.unwrap();
    assert_eq!(file.locations.len(), 10);
    assert_eq!(file.locations[0].name, "San Francisco, CA");
}
