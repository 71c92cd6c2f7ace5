pub mod slot_machine;
