#![allow(dead_code)]

pub use mpu6050_motion::{HighPassFilterCutoff, MotionConfig, Mpu6050};

use embedded_hal_mock as hal;
pub use hal::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

pub const DEV_ADDR: u8 = 0x68;

pub const PWR_MGMT_1: u8 = 0x6B;
pub const MOT_DETECT_CTRL: u8 = 0x69;
pub const ACCEL_CONFIG: u8 = 0x1C;
pub const MOT_THR: u8 = 0x1F;
pub const MOT_DUR: u8 = 0x20;
pub const ZRMOT_THR: u8 = 0x21;
pub const ZRMOT_DUR: u8 = 0x22;
pub const INT_ENABLE: u8 = 0x38;
pub const INT_STATUS: u8 = 0x3A;
pub const MOT_DETECT_STATUS: u8 = 0x61;
pub const SIGNAL_PATH_RESET: u8 = 0x68;
pub const WHO_AM_I: u8 = 0x75;

pub fn trans_read(reg: u8, value: u8) -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, vec![reg], vec![value])
}

pub fn trans_write(reg: u8, value: u8) -> I2cTrans {
    I2cTrans::write(DEV_ADDR, vec![reg, value])
}

/// Init traffic for the default config and 5 Hz cutoff when every register reads zero.
pub fn trans_init() -> Vec<I2cTrans> {
    vec![
        trans_write(PWR_MGMT_1, 0x00),
        trans_read(MOT_DETECT_CTRL, 0x00),
        trans_write(MOT_DETECT_CTRL, 0x30),
        trans_read(ACCEL_CONFIG, 0x00),
        trans_write(ACCEL_CONFIG, 0x01),
        trans_write(MOT_THR, 2),
        trans_write(MOT_DUR, 5),
        trans_write(ZRMOT_THR, 8),
        trans_write(ZRMOT_DUR, 2),
        trans_read(INT_ENABLE, 0x00),
        trans_write(INT_ENABLE, 0x60),
    ]
}

/// Builds an initialized driver whose bus then expects `after_init`.
pub fn initialized(after_init: &[I2cTrans]) -> Mpu6050<I2cMock> {
    let mut expectations = trans_init();
    expectations.extend_from_slice(after_init);
    let i2c = I2cMock::new(&expectations);
    Mpu6050::new(i2c, MotionConfig::default()).unwrap()
}

/// Releases the bus and checks every expected transaction happened.
pub fn finish(sensor: Mpu6050<I2cMock>) {
    let mut i2c = sensor.release();
    i2c.done();
}
