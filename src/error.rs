use core::fmt::{Debug, Formatter};

use embedded_hal::i2c::{self, ErrorKind, ErrorType, NoAcknowledgeSource};

use crate::register::Register;

/// Driver operation during which a bus transaction failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operation {
    Init,
    SetFilterCutoff,
    ReadAxisMotion,
    ReadInterruptStatus,
    ReadDeviceId,
    ResetSignalPath,
    ReadAcceleration,
}

/// Direction of the failed register transfer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Access {
    Read,
    Write,
}

/// Coarse classification of a bus error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusFault {
    /// The device did not answer its address or the bus was held by another master.
    ///
    /// Typically means the sensor is disconnected; retrying may help.
    TransportUnavailable,
    /// Any other bus failure.
    Other(ErrorKind),
}

impl From<ErrorKind> for BusFault {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) | ErrorKind::ArbitrationLoss => {
                Self::TransportUnavailable
            }
            kind => Self::Other(kind),
        }
    }
}

/// Error for sensor operations.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A register transfer failed. Nothing after it was attempted.
    Bus {
        operation: Operation,
        register: Register,
        access: Access,
        cause: E,
    },
    /// WHO_AM_I held an unexpected value.
    WrongDevice(u8),
}

impl<E> Error<E> {
    /// Register involved in the failed transfer, if any.
    pub fn register(&self) -> Option<Register> {
        match self {
            Self::Bus { register, .. } => Some(*register),
            Self::WrongDevice(_) => None,
        }
    }

    /// Operation that was running when the transfer failed, if any.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Bus { operation, .. } => Some(*operation),
            Self::WrongDevice(_) => None,
        }
    }
}

impl<E: i2c::Error> Error<E> {
    /// Classifies the underlying bus error.
    pub fn fault(&self) -> Option<BusFault> {
        match self {
            Self::Bus { cause, .. } => Some(cause.kind().into()),
            Self::WrongDevice(_) => None,
        }
    }

    /// Returns `true` if the device could not be reached at all.
    pub fn is_transport_unavailable(&self) -> bool {
        self.fault() == Some(BusFault::TransportUnavailable)
    }
}

/// Error during initialization of the sensor. Wraps [`Error`] and hands the
/// bus back.
pub struct InitError<I2C>
where
    I2C: ErrorType,
{
    pub i2c: I2C,
    pub error: Error<I2C::Error>,
}

impl<I2C> Debug for InitError<I2C>
where
    I2C: ErrorType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.error.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_nack_is_transport_unavailable() {
        assert_eq!(
            BusFault::from(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)),
            BusFault::TransportUnavailable
        );
        assert_eq!(
            BusFault::from(ErrorKind::ArbitrationLoss),
            BusFault::TransportUnavailable
        );
    }

    #[test]
    fn other_kinds_are_kept() {
        assert_eq!(
            BusFault::from(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data)),
            BusFault::Other(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data))
        );
        assert_eq!(BusFault::from(ErrorKind::Bus), BusFault::Other(ErrorKind::Bus));
        assert_eq!(BusFault::from(ErrorKind::Other), BusFault::Other(ErrorKind::Other));
    }

    #[test]
    fn error_accessors() {
        let error: Error<ErrorKind> = Error::Bus {
            operation: Operation::SetFilterCutoff,
            register: Register::AccelConfig,
            access: Access::Read,
            cause: ErrorKind::Overrun,
        };
        assert_eq!(error.register(), Some(Register::AccelConfig));
        assert_eq!(error.operation(), Some(Operation::SetFilterCutoff));
        assert_eq!(error.fault(), Some(BusFault::Other(ErrorKind::Overrun)));
        assert!(!error.is_transport_unavailable());

        let error: Error<ErrorKind> = Error::WrongDevice(0x70);
        assert_eq!(error.register(), None);
        assert_eq!(error.fault(), None);
    }
}
