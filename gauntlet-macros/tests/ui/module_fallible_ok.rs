#![allow(missing_docs)]

use gauntlet_di::{ContainerBuilder, error::Error, module};

struct Port(u16);

struct Address {
    #[allow(dead_code)]
    port: Port,
}

struct NetworkModule {
    port: u16,
}

#[module]
impl NetworkModule {
    #[provides(fallible)]
    fn port(&self) -> Result<Port, Error> {
        if self.port == 0 {
            return Err(Error::other("port must not be zero"));
        }
        Ok(Port(self.port))
    }

    #[provides]
    fn address(port: Port) -> Address {
        Address { port }
    }
}

fn main() {
    let mut builder = ContainerBuilder::new();
    builder.register_module(NetworkModule { port: 8080 }).unwrap();

    let _ = builder.build().get::<Address>();
}
