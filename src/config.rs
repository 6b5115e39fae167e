//! Configuration primitives for the ADS131M08 driver.

use crate::params::Gain;

/// User-facing configuration for the ADS131M08 ADC.
///
/// Gain fields cannot hold out-of-range values; the eight supported
/// powers of two are the only representable settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// PGA gain applied to channels 0 through 3 (`GAIN1`).
    pub gain_ch0_3: Gain,
    /// PGA gain applied to channels 4 through 7 (`GAIN2`).
    pub gain_ch4_7: Gain,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the gain for channels 0 through 3.
    pub fn gain_ch0_3(mut self, gain: Gain) -> Self {
        self.config.gain_ch0_3 = gain;
        self
    }

    /// Overrides the gain for channels 4 through 7.
    pub fn gain_ch4_7(mut self, gain: Gain) -> Self {
        self.config.gain_ch4_7 = gain;
        self
    }

    /// Applies the same gain to all eight channels.
    pub fn gain_all(mut self, gain: Gain) -> Self {
        self.config.gain_ch0_3 = gain;
        self.config.gain_ch4_7 = gain;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for Config {
    fn default() -> Self {
        // Device reset state: unity gain on every channel.
        Self {
            gain_ch0_3: Gain::X1,
            gain_ch4_7: Gain::X1,
        }
    }
}
