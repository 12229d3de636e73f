//! Message class and id constants from the receiver protocol description.

pub const CLASS_NAV: u8 = 0x01;
pub const CLASS_RXM: u8 = 0x02;
pub const CLASS_INF: u8 = 0x04;
pub const CLASS_ACK: u8 = 0x05;
pub const CLASS_CFG: u8 = 0x06;
pub const CLASS_MON: u8 = 0x0a;
pub const CLASS_AID: u8 = 0x0b;
pub const CLASS_TIM: u8 = 0x0d;
pub const CLASS_ESF: u8 = 0x10;

// ACK messages
pub const MSG_ACK_NACK: u8 = 0x00;
pub const MSG_ACK_ACK: u8 = 0x01;

// NAV messages
pub const MSG_NAV_POSECEF: u8 = 0x01;
pub const MSG_NAV_POSLLH: u8 = 0x02;
pub const MSG_NAV_STATUS: u8 = 0x03;
pub const MSG_NAV_DOP: u8 = 0x04;
pub const MSG_NAV_SOL: u8 = 0x06;
pub const MSG_NAV_POSUTM: u8 = 0x08;
pub const MSG_NAV_VELECEF: u8 = 0x11;
pub const MSG_NAV_VELNED: u8 = 0x12;
pub const MSG_NAV_TIMEGPS: u8 = 0x20;
pub const MSG_NAV_TIMEUTC: u8 = 0x21;
pub const MSG_NAV_CLOCK: u8 = 0x22;
pub const MSG_NAV_SVINFO: u8 = 0x30;
pub const MSG_NAV_DGPS: u8 = 0x31;
pub const MSG_NAV_SBAS: u8 = 0x32;
pub const MSG_NAV_SVIN: u8 = 0x3b;
pub const MSG_NAV_EKFSTATUS: u8 = 0x40;
pub const MSG_NAV_AOPSTATUS: u8 = 0x60;

// RXM messages
pub const MSG_RXM_RAW: u8 = 0x10;
pub const MSG_RXM_SFRB: u8 = 0x11;
pub const MSG_RXM_SVSI: u8 = 0x20;
pub const MSG_RXM_ALM: u8 = 0x30;
pub const MSG_RXM_EPH: u8 = 0x31;
pub const MSG_RXM_PMREQ: u8 = 0x41;

// AID messages
pub const MSG_AID_REQ: u8 = 0x00;
pub const MSG_AID_INI: u8 = 0x01;
pub const MSG_AID_HUI: u8 = 0x02;
pub const MSG_AID_DATA: u8 = 0x10;
pub const MSG_AID_ALM: u8 = 0x30;
pub const MSG_AID_EPH: u8 = 0x31;
pub const MSG_AID_ALPSRV: u8 = 0x32;
pub const MSG_AID_AOP: u8 = 0x33;
pub const MSG_AID_ALP: u8 = 0x50;

// CFG messages
pub const MSG_CFG_PRT: u8 = 0x00;
pub const MSG_CFG_MSG: u8 = 0x01;
pub const MSG_CFG_INF: u8 = 0x02;
pub const MSG_CFG_RST: u8 = 0x04;
pub const MSG_CFG_DAT: u8 = 0x06;
pub const MSG_CFG_TP: u8 = 0x07;
pub const MSG_CFG_RATE: u8 = 0x08;
pub const MSG_CFG_CFG: u8 = 0x09;
pub const MSG_CFG_FXN: u8 = 0x0e;
pub const MSG_CFG_RXM: u8 = 0x11;
pub const MSG_CFG_EKF: u8 = 0x12;
pub const MSG_CFG_ANT: u8 = 0x13;
pub const MSG_CFG_SBAS: u8 = 0x16;
pub const MSG_CFG_NMEA: u8 = 0x17;
pub const MSG_CFG_USB: u8 = 0x1b;
pub const MSG_CFG_TMODE: u8 = 0x1d;
pub const MSG_CFG_NVS: u8 = 0x22;
pub const MSG_CFG_NAVX5: u8 = 0x23;
pub const MSG_CFG_NAV5: u8 = 0x24;
pub const MSG_CFG_ESFGWT: u8 = 0x29;
pub const MSG_CFG_TPS: u8 = 0x31;
pub const MSG_CFG_PM: u8 = 0x32;
pub const MSG_CFG_RINV: u8 = 0x34;
pub const MSG_CFG_ITFM: u8 = 0x39;
pub const MSG_CFG_PM2: u8 = 0x3b;
pub const MSG_CFG_TMODE2: u8 = 0x3d;
pub const MSG_CFG_GNSS: u8 = 0x3e;

// ESF messages
pub const MSG_ESF_MEAS: u8 = 0x02;
pub const MSG_ESF_STATUS: u8 = 0x10;

// INF messages
pub const MSG_INF_ERROR: u8 = 0x00;
pub const MSG_INF_WARNING: u8 = 0x01;
pub const MSG_INF_NOTICE: u8 = 0x02;
pub const MSG_INF_TEST: u8 = 0x03;
pub const MSG_INF_DEBUG: u8 = 0x04;

// MON messages
pub const MSG_MON_SCHD: u8 = 0x01;
pub const MSG_MON_IO: u8 = 0x02;
pub const MSG_MON_VER: u8 = 0x04;
pub const MSG_MON_MSGPP: u8 = 0x06;
pub const MSG_MON_RXBUF: u8 = 0x07;
pub const MSG_MON_TXBUF: u8 = 0x08;
pub const MSG_MON_HW: u8 = 0x09;
pub const MSG_MON_HW2: u8 = 0x0b;
pub const MSG_MON_RXR: u8 = 0x21;

// TIM messages
pub const MSG_TIM_TP: u8 = 0x01;
pub const MSG_TIM_TM2: u8 = 0x03;
pub const MSG_TIM_SVIN: u8 = 0x04;
pub const MSG_TIM_VRFY: u8 = 0x06;
