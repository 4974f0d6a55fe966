//! Client library for the anchnet cloud
//!
//! First class resources in anchnet:
//! - Instance: a virtual machine, e.g. `i-DCFA40VV`
//! - Volume: a hard disk or SSD that can be attached to an instance, e.g. `vol-46Q60KA1`
//! - External IP (EIP): a public address that can be attached to an instance, e.g. `eip-TYFJDV7K`
//! - SDN network (vxnet): a public or private network connecting instances, e.g. `vxnet-OXC1RD7G`.
//!   Instances created with an EIP join the default public network `vxnet-0`.
//!
//! [`api`] holds the transport; [`types`] holds the request and response
//! shapes for every operation.

pub mod api;
pub mod config;
pub mod types;
