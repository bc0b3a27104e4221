//! STM32H533 register definitions as shipped by the vendor.
//!
//! Known defects are kept here unchanged and corrected in
//! [`errata`](super::errata).

#![allow(missing_docs)]

crate::table! {
    /// Reset and clock control.
    RCC {
        RCC 0x4402_0C00;
        /// Clock control register.
        CR 0x000 {
            HSION 0 0x0000_0001;
            HSIRDY 1 0x0000_0002;
            HSIKERON 2 0x0000_0004;
            HSIDIV 3 0x0000_0018;
            HSIDIVF 5 0x0000_0020;
            CSION 8 0x0000_0100;
            CSIRDY 9 0x0000_0200;
            CSIKERON 10 0x0000_0400;
            HSI48ON 12 0x0000_1000;
            HSI48RDY 13 0x0000_2000;
            HSEON 16 0x0001_0000;
            HSERDY 17 0x0002_0000;
            HSEBYP 18 0x0004_0000;
            HSEEXT 20 0x0010_0000;
            PLL1ON 24 0x0100_0000;
            PLL1RDY 25 0x0200_0000;
            PLL2ON 26 0x0400_0000;
            PLL2RDY 27 0x0800_0000;
            PLL3ON 28 0x1000_0000;
            PLL3RDY 29 0x2000_0000;
        }
        /// Clock configuration register 1.
        CFGR1 0x01C {
            SW 0 0x0000_0003;
            SWS 3 0x0000_0018;
            STOPWUCK 6 0x0000_0040;
            STOPKERWUCK 7 0x0000_0080;
            RTCPRE 8 0x0000_3F00;
            TIMPRE 15 0x0000_8000;
            MCO1PRE 18 0x003C_0000;
            MCO1SEL 22 0x01C0_0000;
            MCO2PRE 25 0x1E00_0000;
            MCO2SEL 29 0xE000_0000;
        }
        /// Clock configuration register 2.
        CFGR2 0x020 {
            HPRE 0 0x0000_000F;
            PPRE1 4 0x0000_0070;
            PPRE2 8 0x0000_0700;
            PPRE3 12 0x0000_7000;
        }
        /// PLL1 configuration register.
        PLL1CFGR 0x028 {
            PLL1SRC 0 0x0000_0003;
            PLL1RGE 2 0x0000_000C;
            PLL1FRACEN 4 0x0000_0010;
            PLL1VCOSEL 5 0x0000_0020;
            PLL1M 8 0x0000_3F00;
            PLL1PEN 16 0x0001_0000;
            PLL1QEN 17 0x0002_0000;
            PLL1REN 18 0x0004_0000;
        }
        /// PLL1 dividers register.
        PLL1DIVR 0x034 {
            PLL1N 0 0x0000_01FF;
            PLL1P 9 0x0000_FE00;
            PLL1Q 16 0x007F_0000;
            PLL1R 24 0x7F00_0000;
        }
        /// AHB1 peripheral clock enable register.
        AHB1ENR 0x088 {
            GPDMA1EN 0 0x0000_0001;
            GPDMA2EN 1 0x0000_0002;
            FLITFEN 8 0x0000_0100;
        }
        /// AHB2 peripheral clock enable register.
        AHB2ENR 0x08C {
            GPIOAEN 0 0x0000_0001;
            GPIOBEN 1 0x0000_0002;
            GPIOCEN 2 0x0000_0004;
            GPIODEN 3 0x0000_0008;
            GPIOHEN 7 0x0000_0080;
        }
        /// APB1 peripheral clock enable register 1.
        APB1LENR 0x09C {
            TIM2EN 0 0x0000_0001;
            TIM3EN 1 0x0000_0002;
            USART2EN 17 0x0002_0000;
            USART3EN 18 0x0004_0000;
            USART6EN 25 0x0200_0000;
        }
        /// APB2 peripheral clock enable register.
        APB2ENR 0x0A4 {
            TIM1EN 11 0x0000_0800;
            SPI1EN 12 0x0000_1000;
            TIM8EN 13 0x0000_2000;
            USART1EN 14 0x0000_4000;
        }
        /// Kernel clock configuration register 1.
        CCIPR1 0x0D8 {
            USART1SEL 0 0x0000_0007;
            USART2SEL 3 0x0000_0038;
            USART3SEL 6 0x0000_01C0;
            USART6SEL 15 0x0003_8000;
        }
        /// Kernel clock configuration register 5.
        CCIPR5 0x0E8 {
            ADCDACSEL 0 0x0000_0007;
            DACSEL 3 0x0000_0008;
            RNGSEL 4 0x0000_0030;
            CECSEL 6 0x0000_00C0;
            CKERPSEL 30 0xC000_0000;
        }
    }

    /// Embedded flash memory interface.
    FLASH {
        FLASH 0x4002_2000;
        /// Access control register.
        ACR 0x000 {
            LATENCY 0 0x0000_000F;
            WRHIGHFREQ 4 0x0000_0030;
            PRFTEN 8 0x0000_0100;
        }
    }

    /// Power control.
    PWR {
        PWR 0x4402_0800;
        /// Voltage scaling control register.
        VOSCR 0x010 {
            VOS 4 0x0000_0030;
        }
        /// Voltage scaling status register.
        VOSSR 0x014 {
            VOSRDY 3 0x0000_0008;
            ACTVOSRDY 13 0x0000_2000;
            ACTVOS 14 0x0000_C000;
        }
    }

    /// General-purpose I/O.
    GPIO {
        GPIOA 0x4202_0000;
        GPIOB 0x4202_0400;
        GPIOC 0x4202_0800;
        GPIOD 0x4202_0C00;
        GPIOH 0x4202_1C00;
        /// Mode register.
        MODER 0x000 {
            MODE0 0 0x0000_0003;
            MODE1 2 0x0000_000C;
            MODE2 4 0x0000_0030;
            MODE3 6 0x0000_00C0;
            MODE4 8 0x0000_0300;
            MODE5 10 0x0000_0C00;
            MODE6 12 0x0000_3000;
            MODE7 14 0x0000_C000;
            MODE8 16 0x0003_0000;
            MODE9 18 0x000C_0000;
            MODE10 20 0x0030_0000;
            MODE11 22 0x00C0_0000;
            MODE12 24 0x0300_0000;
            MODE13 26 0x0C00_0000;
            MODE14 28 0x3000_0000;
            MODE15 30 0xC000_0000;
        }
        /// Output type register.
        OTYPER 0x004 {
            OT0 0 0x0000_0001;
            OT1 1 0x0000_0002;
            OT2 2 0x0000_0004;
            OT3 3 0x0000_0008;
            OT4 4 0x0000_0010;
            OT5 5 0x0000_0020;
            OT6 6 0x0000_0040;
            OT7 7 0x0000_0080;
            OT8 8 0x0000_0100;
            OT9 9 0x0000_0200;
            OT10 10 0x0000_0400;
            OT11 11 0x0000_0800;
            OT12 12 0x0000_1000;
            OT13 13 0x0000_2000;
            OT14 14 0x0000_4000;
            OT15 15 0x0000_8000;
        }
        /// Output speed register.
        OSPEEDR 0x008 {
            OSPEED0 0 0x0000_0003;
            OSPEED1 2 0x0000_000C;
            OSPEED2 4 0x0000_0030;
            OSPEED3 6 0x0000_00C0;
            OSPEED4 8 0x0000_0300;
            OSPEED5 10 0x0000_0C00;
            OSPEED6 12 0x0000_3000;
            OSPEED7 14 0x0000_C000;
            OSPEED8 16 0x0003_0000;
            OSPEED9 18 0x000C_0000;
            OSPEED10 20 0x0030_0000;
            OSPEED11 22 0x00C0_0000;
            OSPEED12 24 0x0300_0000;
            OSPEED13 26 0x0C00_0000;
            OSPEED14 28 0x3000_0000;
            OSPEED15 30 0xC000_0000;
        }
        /// Pull-up/pull-down register.
        PUPDR 0x00C {
            PUPD0 0 0x0000_0003;
            PUPD1 2 0x0000_000C;
            PUPD2 4 0x0000_0030;
            PUPD3 6 0x0000_00C0;
            PUPD4 8 0x0000_0300;
            PUPD5 10 0x0000_0C00;
            PUPD6 12 0x0000_3000;
            PUPD7 14 0x0000_C000;
            PUPD8 16 0x0003_0000;
            PUPD9 18 0x000C_0000;
            PUPD10 20 0x0030_0000;
            PUPD11 22 0x00C0_0000;
            PUPD12 24 0x0300_0000;
            PUPD13 26 0x0C00_0000;
            PUPD14 28 0x3000_0000;
            PUPD15 30 0xC000_0000;
        }
        /// Input data register.
        IDR 0x010 {
            ID0 0 0x0000_0001;
            ID1 1 0x0000_0002;
            ID2 2 0x0000_0004;
            ID3 3 0x0000_0008;
            ID4 4 0x0000_0010;
            ID5 5 0x0000_0020;
            ID6 6 0x0000_0040;
            ID7 7 0x0000_0080;
            ID8 8 0x0000_0100;
            ID9 9 0x0000_0200;
            ID10 10 0x0000_0400;
            ID11 11 0x0000_0800;
            ID12 12 0x0000_1000;
            ID13 13 0x0000_2000;
            ID14 14 0x0000_4000;
            ID15 15 0x0000_8000;
        }
        /// Output data register.
        ODR 0x014 {
            OD0 0 0x0000_0001;
            OD1 1 0x0000_0002;
            OD2 2 0x0000_0004;
            OD3 3 0x0000_0008;
            OD4 4 0x0000_0010;
            OD5 5 0x0000_0020;
            OD6 6 0x0000_0040;
            OD7 7 0x0000_0080;
            OD8 8 0x0000_0100;
            OD9 9 0x0000_0200;
            OD10 10 0x0000_0400;
            OD11 11 0x0000_0800;
            OD12 12 0x0000_1000;
            OD13 13 0x0000_2000;
            OD14 14 0x0000_4000;
            OD15 15 0x0000_8000;
        }
        /// Bit set/reset register.
        BSRR 0x018 {
            BS0 0 0x0000_0001;
            BS1 1 0x0000_0002;
            BS2 2 0x0000_0004;
            BS3 3 0x0000_0008;
            BS4 4 0x0000_0010;
            BS5 5 0x0000_0020;
            BS6 6 0x0000_0040;
            BS7 7 0x0000_0080;
            BS8 8 0x0000_0100;
            BS9 9 0x0000_0200;
            BS10 10 0x0000_0400;
            BS11 11 0x0000_0800;
            BS12 12 0x0000_1000;
            BS13 13 0x0000_2000;
            BS14 14 0x0000_4000;
            BS15 15 0x0000_8000;
            BR0 16 0x0001_0000;
            BR1 17 0x0002_0000;
            BR2 18 0x0004_0000;
            BR3 19 0x0008_0000;
            BR4 20 0x0010_0000;
            BR5 21 0x0020_0000;
            BR6 22 0x0040_0000;
            BR7 23 0x0080_0000;
            BR8 24 0x0100_0000;
            BR9 25 0x0200_0000;
            BR10 26 0x0400_0000;
            BR11 27 0x0800_0000;
            BR12 28 0x1000_0000;
            BR13 29 0x2000_0000;
            BR14 30 0x4000_0000;
            BR15 31 0x8000_0000;
        }
        /// Alternate function low register.
        AFRL 0x020 {
            AFSEL0 0 0x0000_000F;
            AFSEL1 4 0x0000_00F0;
            AFSEL2 8 0x0000_0F00;
            AFSEL3 12 0x0000_F000;
            AFSEL4 16 0x000F_0000;
            AFSEL5 20 0x00F0_0000;
            AFSEL6 24 0x0F00_0000;
            AFSEL7 28 0xF000_0000;
        }
        /// Alternate function high register.
        AFRH 0x024 {
            AFSEL8 0 0x0000_000F;
            AFSEL9 4 0x0000_00F0;
            AFSEL10 8 0x0000_0F00;
            AFSEL11 12 0x0000_F000;
            AFSEL12 16 0x000F_0000;
            AFSEL13 20 0x00F0_0000;
            AFSEL14 24 0x0F00_0000;
            AFSEL15 28 0xF000_0000;
        }
    }

    /// Universal synchronous/asynchronous receiver transmitter.
    USART {
        USART1 0x4001_3800;
        USART2 0x4000_4400;
        USART3 0x4000_4800;
        USART6 0x4000_6400;
        /// Control register 1.
        CR1 0x000 {
            UE 0 0x0000_0001;
            UESM 1 0x0000_0002;
            RE 2 0x0000_0004;
            TE 3 0x0000_0008;
            IDLEIE 4 0x0000_0010;
            RXFNEIE 5 0x0000_0020;
            TCIE 6 0x0000_0040;
            TXFNFIE 7 0x0000_0080;
            PEIE 8 0x0000_0100;
            PS 9 0x0000_0200;
            PCE 10 0x0000_0400;
            WAKE 11 0x0000_0800;
            M0 12 0x0000_1000;
            MME 13 0x0000_2000;
            CMIE 14 0x0000_4000;
            OVER8 15 0x0000_8000;
            DEDT 16 0x001F_0000;
            DEAT 21 0x03E0_0000;
            RTOIE 26 0x0400_0000;
            EOBIE 27 0x0800_0000;
            M1 28 0x1000_0000;
            FIFOEN 29 0x2000_0000;
            TXFEIE 30 0x4000_0000;
            RXFFIE 31 0x8000_0000;
        }
        /// Control register 2.
        CR2 0x004 {
            ADDM7 4 0x0000_0010;
            LBDL 5 0x0000_0020;
            LBDIE 6 0x0000_0040;
            LBCL 8 0x0000_0100;
            CPHA 9 0x0000_0200;
            CPOL 10 0x0000_0400;
            CLKEN 11 0x0000_0800;
            STOP 12 0x0000_3000;
            LINEN 14 0x0000_4000;
            SWAP 15 0x0000_8000;
            RXINV 16 0x0001_0000;
            TXINV 17 0x0002_0000;
            DATAINV 18 0x0004_0000;
            MSBFIRST 19 0x0008_0000;
            ABREN 20 0x0010_0000;
            ABRMODE 21 0x0060_0000;
            RTOEN 23 0x0080_0000;
            ADD 24 0xFF00_0000;
        }
        /// Control register 3.
        CR3 0x008 {
            EIE 0 0x0000_0001;
            IREN 1 0x0000_0002;
            IRLP 2 0x0000_0004;
            HDSEL 3 0x0000_0008;
            NACK 4 0x0000_0010;
            SCEN 5 0x0000_0020;
            DMAR 6 0x0000_0040;
            DMAT 7 0x0000_0080;
            RTSE 8 0x0000_0100;
            CTSE 9 0x0000_0200;
            CTSIE 10 0x0000_0400;
            ONEBIT 11 0x0000_0800;
            OVRDIS 12 0x0000_1000;
            DDRE 13 0x0000_2000;
            DEM 14 0x0000_4000;
            DEP 15 0x0000_8000;
            TXFTIE 23 0x0080_0000;
            RXFTCFG 25 0x0E00_0000;
            RXFTIE 28 0x1000_0000;
            TXFTCFG 29 0xE000_0000;
        }
        /// Baud rate register.
        BRR 0x00C {
            BRR_0_3 0 0x0000_000F;
            BRR_4_15 4 0x0000_FFF0;
        }
        /// Guard time and prescaler register.
        GTPR 0x010 {
            PSC 0 0x0000_00FF;
            GT 8 0x0000_FF00;
        }
        /// Receiver timeout register.
        RTOR 0x014 {
            RTO 0 0x00FF_FFFF;
            BLEN 24 0xFF00_0000;
        }
        /// Request register.
        RQR 0x018 {}
        /// Interrupt and status register.
        ISR 0x01C {
            PE 0 0x0000_0001;
            FE 1 0x0000_0002;
            NE 2 0x0000_0004;
            ORE 3 0x0000_0008;
            IDLE 4 0x0000_0010;
            RXFNE 5 0x0000_0020;
            TC 6 0x0000_0040;
            TXFNF 7 0x0000_0080;
            LBDF 8 0x0000_0100;
            CTSIF 9 0x0000_0200;
            CTS 10 0x0000_0400;
            RTOF 11 0x0000_0800;
            EOBF 12 0x0000_1000;
            UDR 13 0x0000_2000;
            ABRE 14 0x0000_4000;
            ABRF 15 0x0000_8000;
            BUSY 16 0x0001_0000;
            CMF 17 0x0002_0000;
            SBKF 18 0x0004_0000;
            RWU 19 0x0008_0000;
            TEACK 21 0x0020_0000;
            REACK 22 0x0040_0000;
            TXFE 23 0x0080_0000;
            RXFF 24 0x0100_0000;
            TCBGT 25 0x0200_0000;
            RXFT 26 0x0400_0000;
            TXFT 27 0x0800_0000;
        }
        /// Interrupt flag clear register.
        ICR 0x020 {
            PECF 0 0x0000_0001;
            FECF 1 0x0000_0002;
            NECF 2 0x0000_0004;
            ORECF 3 0x0000_0008;
            IDLECF 4 0x0000_0010;
            TXFECF 5 0x0000_0020;
            TCCF 6 0x0000_0040;
            TCBGTCF 7 0x0000_0080;
            LBDCF 8 0x0000_0100;
            CTSCF 9 0x0000_0200;
            RTOCF 11 0x0000_0800;
            EOBCF 12 0x0000_1000;
            UDRCF 13 0x0000_2000;
            CMCF 17 0x0002_0000;
        }
        /// Receive data register.
        RDR 0x024 {}
        /// Transmit data register.
        TDR 0x028 {}
        /// Prescaler register.
        PRESC 0x02C {
            PRESCALER 0 0x0000_000F;
        }
    }

    /// General-purpose DMA channels.
    DMA {
        GPDMA1_Channel0 0x4002_0050;
        GPDMA1_Channel1 0x4002_00D0;
        GPDMA1_Channel2 0x4002_0150;
        GPDMA1_Channel3 0x4002_01D0;
        GPDMA1_Channel4 0x4002_0250;
        GPDMA1_Channel5 0x4002_02D0;
        GPDMA1_Channel6 0x4002_0350;
        GPDMA1_Channel7 0x4002_03D0;
        GPDMA2_Channel0 0x4002_1050;
        GPDMA2_Channel1 0x4002_10D0;
        GPDMA2_Channel2 0x4002_1150;
        GPDMA2_Channel3 0x4002_11D0;
        GPDMA2_Channel4 0x4002_1250;
        GPDMA2_Channel5 0x4002_12D0;
        GPDMA2_Channel6 0x4002_1350;
        GPDMA2_Channel7 0x4002_13D0;
        /// Channel linked-list base address register.
        CLBAR 0x000 {
            LBA 16 0xFFFF_0000;
        }
        /// Channel flag clear register.
        CFCR 0x00C {
            TCF 8 0x0000_0100;
            HTF 9 0x0000_0200;
            DTEF 10 0x0000_0400;
            ULEF 11 0x0000_0800;
            USEF 12 0x0000_1000;
            SUSPF 13 0x0000_2000;
            TOF 14 0x0000_4000;
        }
        /// Channel status register.
        CSR 0x010 {
            IDLEF 0 0x0000_0001;
            TCF 8 0x0000_0100;
            HTF 9 0x0000_0200;
            DTEF 10 0x0000_0400;
            ULEF 11 0x0000_0800;
            USEF 12 0x0000_1000;
            SUSPF 13 0x0000_2000;
            TOF 14 0x0000_4000;
            FIFOL 16 0x00FF_0000;
        }
        /// Channel control register.
        CCR 0x014 {
            EN 0 0x0000_0001;
            RESET 1 0x0000_0002;
            SUSP 2 0x0000_0004;
            TCIE 8 0x0000_0100;
            HTIE 9 0x0000_0200;
            DTEIE 10 0x0000_0400;
            ULEIE 11 0x0000_0800;
            USEIE 12 0x0000_1000;
            SUSPIE 13 0x0000_2000;
            TOIE 14 0x0000_4000;
            LSM 16 0x0001_0000;
            LAP 17 0x0002_0000;
            PRIO 22 0x00C0_0000;
        }
        /// Channel transfer register 1.
        CTR1 0x040 {
            SDW_LOG2 0 0x0000_0003;
            SINC 3 0x0000_0008;
            SBL_1 4 0x0000_03F0;
            DDW_LOG2 16 0x0003_0000;
            DINC 19 0x0008_0000;
            DBL_1 20 0x03F0_0000;
        }
        /// Channel transfer register 2.
        CTR2 0x044 {
            REQSEL 0 0x0000_007F;
            SWREQ 9 0x0000_0200;
            DREQ 10 0x0000_0400;
            BREQ 11 0x0000_0800;
            TCEM 30 0xC000_0000;
        }
        /// Channel block register 1.
        CBR1 0x048 {
            BNDT 0 0x0000_FFFF;
        }
        /// Channel source address register.
        CSAR 0x04C {
            SA 0 0xFFFF_FFFF;
        }
        /// Channel destination address register.
        CDAR 0x050 {
            DA 0 0xFFFF_FFFF;
        }
    }
}
