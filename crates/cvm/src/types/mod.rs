mod aip;
mod cvm_list;
mod input;

pub use aip::{Aip, AipFlag};
pub use cvm_list::{CvmEntry, CvmList, describe_cvm_code};
pub use input::{CardTags, TagValue};
