//! Weather icon codes and image resources

/// Weather icon, as coded on the companion link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WeatherIcon {
    /// No icon
    #[default]
    None = 0,
    ClearDay = 1,
    ClearNight = 2,
    Rain = 3,
    Snow = 4,
    Sleet = 5,
    Wind = 6,
    Fog = 7,
    Cloudy = 8,
    PartlyCloudyDay = 9,
    PartlyCloudyNight = 10,
}

/// Image resources the watchface can load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceId {
    Sun25,
    BrightMoon25,
    Rain25,
    Snow25,
    Sleet25,
    AirElement25,
    Dust25,
    Clouds25,
    PartlyCloudyDay25,
    PartlyCloudyNight25,
}

/// Icon table: (icon, companion name, image)
const ICONS: [(WeatherIcon, &str, ResourceId); 10] = [
    (WeatherIcon::ClearDay, "clear-day", ResourceId::Sun25),
    (WeatherIcon::ClearNight, "clear-night", ResourceId::BrightMoon25),
    (WeatherIcon::Rain, "rain", ResourceId::Rain25),
    (WeatherIcon::Snow, "snow", ResourceId::Snow25),
    (WeatherIcon::Sleet, "sleet", ResourceId::Sleet25),
    (WeatherIcon::Wind, "wind", ResourceId::AirElement25),
    (WeatherIcon::Fog, "fog", ResourceId::Dust25),
    (WeatherIcon::Cloudy, "cloudy", ResourceId::Clouds25),
    (
        WeatherIcon::PartlyCloudyDay,
        "partly-cloudy-day",
        ResourceId::PartlyCloudyDay25,
    ),
    (
        WeatherIcon::PartlyCloudyNight,
        "partly-cloudy-night",
        ResourceId::PartlyCloudyNight25,
    ),
];

impl WeatherIcon {
    /// Parse from wire code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(WeatherIcon::None),
            1 => Some(WeatherIcon::ClearDay),
            2 => Some(WeatherIcon::ClearNight),
            3 => Some(WeatherIcon::Rain),
            4 => Some(WeatherIcon::Snow),
            5 => Some(WeatherIcon::Sleet),
            6 => Some(WeatherIcon::Wind),
            7 => Some(WeatherIcon::Fog),
            8 => Some(WeatherIcon::Cloudy),
            9 => Some(WeatherIcon::PartlyCloudyDay),
            10 => Some(WeatherIcon::PartlyCloudyNight),
            _ => None,
        }
    }

    /// Convert to wire code
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Icon for a forecast-service icon name; unknown names give `None`
    pub fn from_name(name: &str) -> Self {
        ICONS
            .iter()
            .find(|(_, n, _)| *n == name)
            .map(|(icon, _, _)| *icon)
            .unwrap_or(WeatherIcon::None)
    }

    /// Image to draw, or `None` for no icon
    pub fn resource(self) -> Option<ResourceId> {
        ICONS
            .iter()
            .find(|(icon, _, _)| *icon == self)
            .map(|(_, _, resource)| *resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for code in 0..=10 {
            let icon = WeatherIcon::from_code(code).unwrap();
            assert_eq!(icon.code(), code);
        }
        assert_eq!(WeatherIcon::from_code(11), None);
    }

    #[test]
    fn test_resource_table() {
        assert_eq!(WeatherIcon::None.resource(), None);
        assert_eq!(WeatherIcon::ClearDay.resource(), Some(ResourceId::Sun25));
        assert_eq!(WeatherIcon::Wind.resource(), Some(ResourceId::AirElement25));
        assert_eq!(WeatherIcon::Fog.resource(), Some(ResourceId::Dust25));
        assert_eq!(
            WeatherIcon::PartlyCloudyNight.resource(),
            Some(ResourceId::PartlyCloudyNight25)
        );
    }

    #[test]
    fn test_from_name() {
        assert_eq!(WeatherIcon::from_name("sleet"), WeatherIcon::Sleet);
        assert_eq!(WeatherIcon::from_name("partly-cloudy-day"), WeatherIcon::PartlyCloudyDay);
        assert_eq!(WeatherIcon::from_name("hail"), WeatherIcon::None);
    }
}
