use criterion::{black_box, criterion_group, criterion_main, Criterion};


fn program(repeat: usize) -> String {
    let body = r#"
    .loop{n}:
        clear
        mov v0, 0x05
        mov v1, 10
        mov i, .sprite{n}
        draw v0, v1, 4
        add v0, v1
        lsl v0
        eq v0, 0x40
        jmp .loop{n}
        rnd v2, 0xff
        bcd v2
        ldm v2
        call .done
    .sprite{n}:
        .spr "xxxx    "
        .spr "x  x    "
        .spr "x  x    "
        .spr "xxxx    "
    "#;

    let mut src = String::new();
    for n in 0..repeat {
        src.push_str(&body.replace("{n}", &n.to_string()));
    }
    src.push_str(".done:\n    ret\n");
    src
}

fn criterion_benchmark(c: &mut Criterion) {
    let small = program(1);
    let full = program(100);

    c.bench_function("assemble small", |b| b.iter(|| chipper::assemble(black_box(&small))));
    c.bench_function("assemble 3KB", |b| b.iter(|| chipper::assemble(black_box(&full))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
