use address::{Address, Network, get_address};
use curve::Point;

fn main() {
    let mut point = Point::generator();
    assert!(point.is_on_curve(), "generator is not on the curve");

    for i in 0..4 {
        println!("2^{i} * G");
        println!("  sec:     {}", point.sec_compressed_hex());
        println!("  mainnet: {}", get_address(&point, Network::Mainnet));
        println!("  testnet: {}", get_address(&point, Network::Testnet));
        point = point.double().expect("doubling");
    }

    let addr = Address::from_point(&Point::generator(), Network::Mainnet);
    let bytes = bincode::serialize(&addr).expect("serialize address");
    let decoded: Address = bincode::deserialize(&bytes).expect("deserialize address");
    assert_eq!(addr, decoded);

    let parsed: Address = addr.to_string().parse().expect("parse address");
    assert_eq!(addr, parsed);

    println!("address bytes (bincode): {} bytes", bytes.len());
}
