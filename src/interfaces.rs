pub mod relays;
