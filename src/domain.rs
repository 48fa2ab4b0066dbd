// Domain types
// This module contains the value types jp operates on

pub mod jump_point;
