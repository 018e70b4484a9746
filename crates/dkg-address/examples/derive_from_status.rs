use dkg_address::{derive_address, extract_coordinates};

fn main() {
    // Status blob as captured from party 0 after a 3-of-4 run.
    let status = "✅ DKG completed successfully!\n\n\
        Public Key: Point(x: 3a9bedc74e4ed202c28f8df9bd14df6f0e97c08f380b35b03724d00feceae839, \n\
                          y: e00475c5827682177a3fa3eec9e95f105f26fdeb17fc66521216bf6de920a74a)\n";

    let (x, y) = extract_coordinates(status).expect("status carries a point");
    let addr = derive_address(&x, &y).expect("coordinates are well-formed");

    println!("x:       {}", x);
    println!("y:       {}", y);
    println!("address: {}", addr.hex_lower);
    println!("eip55:   {}", addr.eip55);
}
