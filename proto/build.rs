extern crate protobuf_codegen_pure;

fn main() {
    let protos = [("proto", "proto/bfruntime.proto")];
    for proto in &protos {
        println!("cargo:rerun-if-changed={}", proto.1);
    }
    protobuf_codegen_pure::Codegen::new()
        .out_dir("src")
        .inputs(&protos.iter().map(|x| x.1).collect::<Vec<&str>>())
        .includes(&protos.iter().map(|x| x.0).collect::<Vec<&str>>())
        .run()
        .expect("Failed to compile protobuf definitions!");
}
