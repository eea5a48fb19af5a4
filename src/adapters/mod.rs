//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements       | Connects to              |
//! |-------------|------------------|--------------------------|
//! | `wifi`      | RadioPort        | ESP-IDF WiFi STA / sim   |
//! | `log_sink`  | StatusReporter   | Serial log output        |
//! | `time`      | -                | ESP32 system timer       |
//! | `device_id` | -                | eFuse factory MAC        |

pub mod device_id;
pub mod log_sink;
pub mod time;
pub mod wifi;
