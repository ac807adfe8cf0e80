//! Items for configuring and reading the motion detection engine.
//!
//! The main items are [`MotionConfig`] and [`MotionStatus`].

use bitmask_enum::bitmask;

/// Motion and zero-motion detection thresholds.
///
/// Written verbatim to MOT_THR, MOT_DUR, ZRMOT_THR and ZRMOT_DUR during
/// initialization.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionConfig {
    /// Motion threshold, 1 mg per LSB.
    pub motion_threshold: u8,
    /// Motion duration, 1 ms per LSB.
    pub motion_duration: u8,
    /// Zero-motion threshold, 1 mg per LSB, shared by all axes.
    pub zero_motion_threshold: u8,
    /// Zero-motion duration, 1 ms per LSB, shared by all axes.
    pub zero_motion_duration: u8,
}

impl MotionConfig {
    /// 2 mg / 5 ms for motion, 8 mg / 2 ms for zero-motion.
    pub const DEFAULT: Self = Self {
        motion_threshold: 2,
        motion_duration: 5,
        zero_motion_threshold: 8,
        zero_motion_duration: 2,
    };

    /// Creates a configuration from raw register values.
    pub const fn new(
        motion_threshold: u8,
        motion_duration: u8,
        zero_motion_threshold: u8,
        zero_motion_duration: u8,
    ) -> Self {
        Self {
            motion_threshold,
            motion_duration,
            zero_motion_threshold,
            zero_motion_duration,
        }
    }

    /// Sets the motion threshold and duration.
    #[must_use]
    pub const fn with_motion(mut self, threshold: u8, duration: u8) -> Self {
        self.motion_threshold = threshold;
        self.motion_duration = duration;
        self
    }

    /// Sets the zero-motion threshold and duration.
    #[must_use]
    pub const fn with_zero_motion(mut self, threshold: u8, duration: u8) -> Self {
        self.zero_motion_threshold = threshold;
        self.zero_motion_duration = duration;
        self
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Accelerometer axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Motion seen on a single axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionSignal {
    /// Motion along the positive direction.
    Positive,
    /// Motion along the negative direction.
    Negative,
    /// No motion flagged on this axis.
    None,
    /// The device reports sustained zero-motion.
    Zero,
}

/// Contents of MOT_DETECT_STATUS.
///
/// The register is latched: reading it acknowledges the event, so decode every
/// axis you care about from the same value.
#[bitmask(u8)]
pub enum MotionStatus {
    ZeroMotion = Self(0b0000_0001),
    ZPos = Self(0b0000_0100),
    ZNeg = Self(0b0000_1000),
    YPos = Self(0b0001_0000),
    YNeg = Self(0b0010_0000),
    XPos = Self(0b0100_0000),
    XNeg = Self(0b1000_0000),
}

impl MotionStatus {
    /// Decodes the motion on `axis`.
    ///
    /// Zero-motion overrides every directional bit. If both directions are
    /// flagged on the same axis, [`MotionSignal::Positive`] is returned.
    pub fn signal(self, axis: Axis) -> MotionSignal {
        if self.contains(Self::ZeroMotion) {
            return MotionSignal::Zero;
        }

        let (pos, neg) = match axis {
            Axis::X => (Self::XPos, Self::XNeg),
            Axis::Y => (Self::YPos, Self::YNeg),
            Axis::Z => (Self::ZPos, Self::ZNeg),
        };

        if self.contains(pos) {
            MotionSignal::Positive
        } else if self.contains(neg) {
            MotionSignal::Negative
        } else {
            MotionSignal::None
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MotionStatus {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "MotionStatus({=u8:#010b})", u8::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[test]
    fn zero_motion_overrides_every_axis_bit() {
        for high in 0..=0x7Fu8 {
            let raw = (high << 1) | 0x01;
            for axis in AXES {
                assert_eq!(MotionStatus::from(raw).signal(axis), MotionSignal::Zero);
            }
        }
    }

    #[test]
    fn x_axis_direction() {
        assert_eq!(
            MotionStatus::from(0b0100_0000).signal(Axis::X),
            MotionSignal::Positive
        );
        assert_eq!(
            MotionStatus::from(0b1000_0000).signal(Axis::X),
            MotionSignal::Negative
        );
        assert_eq!(
            MotionStatus::from(0b0000_0000).signal(Axis::X),
            MotionSignal::None
        );
    }

    #[test]
    fn y_and_z_use_their_own_bit_pairs() {
        let status = MotionStatus::from(0b0010_0100);
        assert_eq!(status.signal(Axis::X), MotionSignal::None);
        assert_eq!(status.signal(Axis::Y), MotionSignal::Negative);
        assert_eq!(status.signal(Axis::Z), MotionSignal::Positive);

        let status = MotionStatus::from(0b0001_1000);
        assert_eq!(status.signal(Axis::Y), MotionSignal::Positive);
        assert_eq!(status.signal(Axis::Z), MotionSignal::Negative);
    }

    #[test]
    fn both_directions_resolve_to_positive() {
        let status = MotionStatus::XPos | MotionStatus::XNeg;
        for _ in 0..4 {
            assert_eq!(status.signal(Axis::X), MotionSignal::Positive);
        }
        assert_eq!(
            MotionStatus::from(0b0011_1100).signal(Axis::Y),
            MotionSignal::Positive
        );
        assert_eq!(
            MotionStatus::from(0b0011_1100).signal(Axis::Z),
            MotionSignal::Positive
        );
    }

    #[test]
    fn reserved_bit_is_ignored() {
        for axis in AXES {
            assert_eq!(MotionStatus::from(0b0000_0010).signal(axis), MotionSignal::None);
        }
    }

    #[test]
    fn status_flags_match_register_layout() {
        let bits = [
            MotionStatus::ZeroMotion,
            MotionStatus::ZPos,
            MotionStatus::ZNeg,
            MotionStatus::YPos,
            MotionStatus::YNeg,
            MotionStatus::XPos,
            MotionStatus::XNeg,
        ]
        .map(u8::from);
        assert_eq!(bits, [0x01, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80]);
    }

    #[test]
    fn config_builder() {
        let config = MotionConfig::default().with_motion(20, 1).with_zero_motion(4, 10);
        assert_eq!(config, MotionConfig::new(20, 1, 4, 10));
        assert_eq!(MotionConfig::default(), MotionConfig::new(2, 5, 8, 2));
    }
}
