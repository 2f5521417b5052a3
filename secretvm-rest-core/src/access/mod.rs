mod credentials;
mod gate;
mod policy;


pub use credentials::*;
pub use gate::*;
pub use policy::*;
