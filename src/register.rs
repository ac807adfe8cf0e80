//! Register addresses and the bit fields packed into them.

use bitmask_enum::bitmask;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Register addresses used by the driver.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    SampleRateDivider = 0x19,
    Config = 0x1A,
    AccelConfig = 0x1C,
    MotionThreshold = 0x1F,
    MotionDuration = 0x20,
    ZeroMotionThreshold = 0x21,
    ZeroMotionDuration = 0x22,
    InterruptEnable = 0x38,
    InterruptStatus = 0x3A,
    AccelXOutH = 0x3B,
    MotionDetectStatus = 0x61,
    SignalPathReset = 0x68,
    MotionDetectControl = 0x69,
    PowerManagement = 0x6B,
    WhoAmI = 0x75,
}

/// Default I2C address (AD0 low).
pub const DEFAULT_ADDRESS: u8 = 0x68;
/// Alternate I2C address (AD0 high).
pub const ALTERNATE_ADDRESS: u8 = 0x69;
/// Value held in WHO_AM_I regardless of the AD0 pin.
pub(crate) const DEVICE_ID: u8 = 0x68;

/// Writing this to PWR_MGMT_1 clears SLEEP and selects the internal oscillator.
pub(crate) const WAKE: u8 = 0x00;

/// Accelerometer digital high pass filter cutoff, ACCEL_CONFIG bits 2:0.
///
/// The device powers up with [`None`](Self::None); [`Mpu6050::new`](crate::Mpu6050::new)
/// selects [`Hz5`](Self::Hz5).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HighPassFilterCutoff {
    /// Filter disabled, output passes through.
    None = 0x00,
    Hz5 = 0x01,
    Hz2_5 = 0x02,
    Hz1_25 = 0x03,
    Hz0_63 = 0x04,
    /// Holds the current sample as the filter reference.
    Hold = 0x07,
}

impl HighPassFilterCutoff {
    /// Mask of the cutoff field within ACCEL_CONFIG.
    pub(crate) const FIELD: u8 = 0b0000_0111;

    /// Replaces the cutoff field of an ACCEL_CONFIG value, leaving the other bits alone.
    pub(crate) fn apply(self, accel_config: u8) -> u8 {
        (accel_config & !Self::FIELD) | u8::from(self)
    }

    /// Extracts the cutoff field from an ACCEL_CONFIG value.
    ///
    /// Returns `None` for the reserved codes 5 and 6.
    pub fn from_accel_config(accel_config: u8) -> Option<Self> {
        Self::try_from(accel_config & Self::FIELD).ok()
    }
}

/// Accelerometer full scale range, ACCEL_CONFIG bits 4:3.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    G2 = 0b00,
    G4 = 0b01,
    G8 = 0b10,
    G16 = 0b11,
}

impl AccelRange {
    const SHIFT: u8 = 3;

    /// Reads the range out of an ACCEL_CONFIG value.
    pub fn from_accel_config(accel_config: u8) -> Self {
        match (accel_config >> Self::SHIFT) & 0b11 {
            0b00 => Self::G2,
            0b01 => Self::G4,
            0b10 => Self::G8,
            _ => Self::G16,
        }
    }

    /// Raw counts per g.
    pub fn lsb_per_g(self) -> f32 {
        match self {
            Self::G2 => 16384.0,
            Self::G4 => 8192.0,
            Self::G8 => 4096.0,
            Self::G16 => 2048.0,
        }
    }
}

/// Extra power-on delay for the accelerometer, MOT_DETECT_CTRL bits 5:4.
///
/// Added on top of the fixed 4 ms the device always waits.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelOnDelay {
    Ms1 = 0x10,
    Ms2 = 0x20,
    Ms3 = 0x30,
}

/// Interrupt sources, as laid out in INT_ENABLE and INT_STATUS.
///
/// Can be combined like a bitmask.
#[bitmask(u8)]
pub enum InterruptSources {
    DataReady = Self(0b0000_0001),
    I2cMaster = Self(0b0000_1000),
    FifoOverflow = Self(0b0001_0000),
    ZeroMotion = Self(0b0010_0000),
    Motion = Self(0b0100_0000),
    FreeFall = Self(0b1000_0000),
}

/// Analog and digital signal paths reset through SIGNAL_PATH_RESET.
///
/// Can be combined like a bitmask. Resetting does not clear the sensor
/// configuration registers.
#[bitmask(u8)]
pub enum SignalPaths {
    Temperature = Self(0b0000_0001),
    Accel = Self(0b0000_0010),
    Gyro = Self(0b0000_0100),
}

#[cfg(feature = "defmt")]
impl defmt::Format for SignalPaths {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "SignalPaths({=u8:#010b})", u8::from(*self))
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for InterruptSources {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "InterruptSources({=u8:#010b})", u8::from(*self))
    }
}
