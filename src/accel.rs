//! Acceleration readout through the [`accelerometer`] traits.

use accelerometer::{
    vector::{F32x3, I16x3},
    Accelerometer, Error as AccelError, RawAccelerometer,
};
use embedded_hal::i2c::I2c;

use crate::{AccelRange, Error, Mpu6050, Operation, Register};

/// Accelerometer output is never faster than this.
const MAX_ACCEL_RATE_HZ: f32 = 1000.0;

impl<I2C> Mpu6050<I2C>
where
    I2C: I2c,
{
    /// Reads the full scale range currently configured in ACCEL_CONFIG.
    pub fn read_accel_range(&mut self) -> Result<AccelRange, Error<I2C::Error>> {
        self.read_reg(Operation::ReadAcceleration, Register::AccelConfig)
            .map(AccelRange::from_accel_config)
    }
}

impl<I2C> RawAccelerometer<I16x3> for Mpu6050<I2C>
where
    I2C: I2c,
{
    type Error = Error<I2C::Error>;

    fn accel_raw(&mut self) -> Result<I16x3, AccelError<Error<I2C::Error>>> {
        let mut data = [0u8; 6];
        self.read_regs(Operation::ReadAcceleration, Register::AccelXOutH, &mut data)?;
        Ok(decode_accel(&data))
    }
}

impl<I2C> Accelerometer for Mpu6050<I2C>
where
    I2C: I2c,
{
    type Error = Error<I2C::Error>;

    fn accel_norm(&mut self) -> Result<F32x3, AccelError<Error<I2C::Error>>> {
        let lsb_per_g = self.read_accel_range()?.lsb_per_g();
        let raw = self.accel_raw()?;
        Ok(F32x3::new(
            raw.x as f32 / lsb_per_g,
            raw.y as f32 / lsb_per_g,
            raw.z as f32 / lsb_per_g,
        ))
    }

    fn sample_rate(&mut self) -> Result<f32, AccelError<Error<I2C::Error>>> {
        let config = self.read_reg(Operation::ReadAcceleration, Register::Config)?;
        let divider = self.read_reg(Operation::ReadAcceleration, Register::SampleRateDivider)?;
        Ok(output_rate(config, divider))
    }
}

/// Decodes ACCEL_XOUT_H..ACCEL_ZOUT_L.
fn decode_accel(data: &[u8; 6]) -> I16x3 {
    I16x3::new(
        i16::from_be_bytes([data[0], data[1]]),
        i16::from_be_bytes([data[2], data[3]]),
        i16::from_be_bytes([data[4], data[5]]),
    )
}

/// Accelerometer output rate from CONFIG and SMPLRT_DIV.
fn output_rate(config: u8, divider: u8) -> f32 {
    // DLPF_CFG 0 and 7 run the gyro output at 8 kHz
    let gyro_rate = match config & 0b111 {
        0 | 7 => 8000.0,
        _ => 1000.0,
    };
    let rate: f32 = gyro_rate / (1.0 + divider as f32);
    rate.min(MAX_ACCEL_RATE_HZ)
}
