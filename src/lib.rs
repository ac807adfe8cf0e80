//! `#![no_std]` driver for the motion detection engine of the MPU-6050.
//!
//! The driver wakes the device, programs the motion and zero-motion
//! thresholds, selects the accelerometer high pass filter and enables the
//! motion interrupts. Afterwards the latched MOT_DETECT_STATUS register can be
//! polled and decoded per axis.
//!
//! ```rust,no_run
//! use mpu6050_motion::{Axis, MotionConfig, MotionSignal, Mpu6050};
//! # fn example<I2C: embedded_hal::i2c::I2c>(i2c: I2C) -> Result<(), mpu6050_motion::Error<I2C::Error>> {
//! let mut sensor = Mpu6050::new(i2c, MotionConfig::default()).map_err(|e| e.error)?;
//! if sensor.read_axis_motion(Axis::X)? == MotionSignal::Positive {
//!     // moving forward
//! }
//! let _i2c = sensor.release();
//! # Ok(())
//! # }
//! ```
//!
//! The driver holds the bus exclusively and is not synchronized. Share a bus
//! between drivers with something like `embedded-hal-bus`.

#![no_std]

use embedded_hal::i2c::I2c;

#[cfg(feature = "accel")]
mod accel;
mod error;
mod log;
mod motion;
mod register;

pub use error::{Access, BusFault, Error, InitError, Operation};
pub use motion::{Axis, MotionConfig, MotionSignal, MotionStatus};
pub use register::{
    AccelOnDelay, AccelRange, HighPassFilterCutoff, InterruptSources, Register, SignalPaths,
    ALTERNATE_ADDRESS, DEFAULT_ADDRESS,
};

use log::{debug, trace};
use register::{DEVICE_ID, WAKE};

/// MPU-6050 motion detection driver.
pub struct Mpu6050<I2C> {
    address: u8,
    i2c: I2C,
    config: MotionConfig,
    cutoff: HighPassFilterCutoff,
}

impl<I2C> Mpu6050<I2C> {
    /// Returns the thresholds the device was initialized with.
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Returns the last high pass filter cutoff successfully written.
    pub fn filter_cutoff(&self) -> HighPassFilterCutoff {
        self.cutoff
    }

    /// Returns the 7-bit I2C address the driver talks to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Releases the underlying I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Mpu6050<I2C>
where
    I2C: I2c,
{
    /// Initializes the sensor at the default address with a 5 Hz cutoff.
    pub fn new(i2c: I2C, config: MotionConfig) -> Result<Self, InitError<I2C>> {
        Self::new_with_cutoff(i2c, config, HighPassFilterCutoff::Hz5)
    }

    /// Initializes the sensor at the default address.
    pub fn new_with_cutoff(
        i2c: I2C,
        config: MotionConfig,
        cutoff: HighPassFilterCutoff,
    ) -> Result<Self, InitError<I2C>> {
        Self::new_with_address(DEFAULT_ADDRESS, i2c, config, cutoff)
    }

    /// Initializes the sensor.
    ///
    /// Stops at the first failed transfer and hands the bus back in the
    /// returned [`InitError`]. The device may be left partially configured.
    pub fn new_with_address(
        address: u8,
        i2c: I2C,
        config: MotionConfig,
        cutoff: HighPassFilterCutoff,
    ) -> Result<Self, InitError<I2C>> {
        let mut sensor = Self {
            address,
            i2c,
            config,
            cutoff: HighPassFilterCutoff::None,
        };
        match sensor.init(cutoff) {
            Ok(()) => Ok(sensor),
            Err(error) => Err(InitError {
                i2c: sensor.release(),
                error,
            }),
        }
    }

    fn init(&mut self, cutoff: HighPassFilterCutoff) -> Result<(), Error<I2C::Error>> {
        const OP: Operation = Operation::Init;

        // Always force the device out of sleep
        self.write_reg(OP, Register::PowerManagement, WAKE)?;
        self.modify_reg(OP, Register::MotionDetectControl, |reg| {
            reg | u8::from(AccelOnDelay::Ms3)
        })?;
        self.apply_filter_cutoff(OP, cutoff)?;

        let MotionConfig {
            motion_threshold,
            motion_duration,
            zero_motion_threshold,
            zero_motion_duration,
        } = self.config;
        self.write_reg(OP, Register::MotionThreshold, motion_threshold)?;
        self.write_reg(OP, Register::MotionDuration, motion_duration)?;
        self.write_reg(OP, Register::ZeroMotionThreshold, zero_motion_threshold)?;
        self.write_reg(OP, Register::ZeroMotionDuration, zero_motion_duration)?;

        let interrupts = InterruptSources::Motion | InterruptSources::ZeroMotion;
        self.modify_reg(OP, Register::InterruptEnable, |reg| reg | u8::from(interrupts))
    }

    /// Sets the accelerometer high pass filter cutoff.
    ///
    /// Only the cutoff field of ACCEL_CONFIG is touched; the full scale range
    /// and self test bits are preserved.
    pub fn set_filter_cutoff(
        &mut self,
        cutoff: HighPassFilterCutoff,
    ) -> Result<(), Error<I2C::Error>> {
        self.apply_filter_cutoff(Operation::SetFilterCutoff, cutoff)
    }

    fn apply_filter_cutoff(
        &mut self,
        op: Operation,
        cutoff: HighPassFilterCutoff,
    ) -> Result<(), Error<I2C::Error>> {
        self.modify_reg(op, Register::AccelConfig, |reg| cutoff.apply(reg))?;
        self.cutoff = cutoff;
        Ok(())
    }

    /// Reads and acknowledges the latched motion status.
    pub fn read_motion_status(&mut self) -> Result<MotionStatus, Error<I2C::Error>> {
        self.read_reg(Operation::ReadAxisMotion, Register::MotionDetectStatus)
            .map(MotionStatus::from)
    }

    /// Reads the motion status and decodes it for a single axis.
    ///
    /// The status is latched and cleared by this read. To inspect several axes
    /// of the same event use [`read_motion_status`](Self::read_motion_status)
    /// and [`MotionStatus::signal`].
    pub fn read_axis_motion(&mut self, axis: Axis) -> Result<MotionSignal, Error<I2C::Error>> {
        Ok(self.read_motion_status()?.signal(axis))
    }

    /// Reads INT_STATUS, which clears the interrupt pin.
    pub fn read_interrupt_status(&mut self) -> Result<InterruptSources, Error<I2C::Error>> {
        self.read_reg(Operation::ReadInterruptStatus, Register::InterruptStatus)
            .map(InterruptSources::from)
    }

    /// Reads WHO_AM_I.
    pub fn read_device_id(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_reg(Operation::ReadDeviceId, Register::WhoAmI)
    }

    /// Checks that an MPU-6050 answers at the configured address.
    pub fn verify_device(&mut self) -> Result<(), Error<I2C::Error>> {
        match self.read_device_id()? {
            DEVICE_ID => Ok(()),
            other => Err(Error::WrongDevice(other)),
        }
    }

    /// Resets the analog and digital signal paths of the selected sensors.
    ///
    /// Clears their output registers; thresholds, filter and interrupt
    /// configuration are left as they are.
    pub fn reset_signal_path(&mut self, paths: SignalPaths) -> Result<(), Error<I2C::Error>> {
        self.write_reg(
            Operation::ResetSignalPath,
            Register::SignalPathReset,
            u8::from(paths),
        )
    }

    pub(crate) fn read_regs(
        &mut self,
        op: Operation,
        reg: Register,
        data: &mut [u8],
    ) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write_read(self.address, &[u8::from(reg)], data)
            .map_err(bus_error(op, reg, Access::Read))
    }

    pub(crate) fn read_reg(
        &mut self,
        op: Operation,
        reg: Register,
    ) -> Result<u8, Error<I2C::Error>> {
        let mut data: [u8; 1] = [0; 1];
        self.read_regs(op, reg, &mut data)?;
        trace!("read {} = {=u8:#x}", reg, data[0]);
        Ok(data[0])
    }

    fn write_reg(
        &mut self,
        op: Operation,
        reg: Register,
        value: u8,
    ) -> Result<(), Error<I2C::Error>> {
        trace!("write {} = {=u8:#x}", reg, value);
        self.i2c
            .write(self.address, &[u8::from(reg), value])
            .map_err(bus_error(op, reg, Access::Write))
    }

    /// Read-modify-write of a single register.
    fn modify_reg(
        &mut self,
        op: Operation,
        reg: Register,
        f: impl FnOnce(u8) -> u8,
    ) -> Result<(), Error<I2C::Error>> {
        let value = self.read_reg(op, reg)?;
        self.write_reg(op, reg, f(value))
    }
}

fn bus_error<E>(
    operation: Operation,
    register: Register,
    access: Access,
) -> impl FnOnce(E) -> Error<E> {
    move |cause| {
        debug!("{} {} of {} failed", operation, access, register);
        Error::Bus {
            operation,
            register,
            access,
            cause,
        }
    }
}
