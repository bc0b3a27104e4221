//! Corrections to the STM32H533 vendor register definitions.

use super::vendor::{RCC_CCIPR5_CKERPSEL_MSK, RCC_CCIPR5_CKERPSEL_POS};

/// Full baud rate divider. The vendor splits it into `BRR_0_3` and
/// `BRR_4_15`.
pub const USART_BRR_BRR_POS: u32 = 0;
/// Full baud rate divider.
pub const USART_BRR_BRR_MSK: u32 = 0xFFFF << USART_BRR_BRR_POS;

/// Peripheral clock source selection. Misspelt `CKERPSEL` by the vendor.
pub const RCC_CCIPR5_CKPERSEL_POS: u32 = RCC_CCIPR5_CKERPSEL_POS;
/// Peripheral clock source selection.
pub const RCC_CCIPR5_CKPERSEL_MSK: u32 = RCC_CCIPR5_CKERPSEL_MSK;

/// Transmit data value. Missing from the vendor definitions.
pub const USART_TDR_TDR_POS: u32 = 0;
/// Transmit data value.
pub const USART_TDR_TDR_MSK: u32 = 0x1FF << USART_TDR_TDR_POS;

/// Receive data value. Missing from the vendor definitions.
pub const USART_RDR_RDR_POS: u32 = 0;
/// Receive data value.
pub const USART_RDR_RDR_MSK: u32 = 0x1FF << USART_RDR_RDR_POS;

/// Auto baud rate request. Missing from the vendor definitions, as are the
/// rest of the request register fields.
pub const USART_RQR_ABRRQ_POS: u32 = 0;
/// Auto baud rate request.
pub const USART_RQR_ABRRQ_MSK: u32 = 0b1 << USART_RQR_ABRRQ_POS;
/// Send break request.
pub const USART_RQR_SBKRQ_POS: u32 = 1;
/// Send break request.
pub const USART_RQR_SBKRQ_MSK: u32 = 0b1 << USART_RQR_SBKRQ_POS;
/// Mute mode request.
pub const USART_RQR_MMRQ_POS: u32 = 2;
/// Mute mode request.
pub const USART_RQR_MMRQ_MSK: u32 = 0b1 << USART_RQR_MMRQ_POS;
/// Receive data flush request.
pub const USART_RQR_RXFRQ_POS: u32 = 3;
/// Receive data flush request.
pub const USART_RQR_RXFRQ_MSK: u32 = 0b1 << USART_RQR_RXFRQ_POS;
/// Transmit data flush request.
pub const USART_RQR_TXFRQ_POS: u32 = 4;
/// Transmit data flush request.
pub const USART_RQR_TXFRQ_MSK: u32 = 0b1 << USART_RQR_TXFRQ_POS;
