use cuda_builder::CudaBuilder;

fn main() {
    CudaBuilder::new("../hello_gpu_kernels")
        .copy_to("../resources/hello_gpu_kernels.ptx")
        .build()
        .unwrap();
}
