use criterion::{Criterion, criterion_group, criterion_main};
use rubrica_engine::parse;

/// Builds a full aprendizaje-shaped document (17 actions, 68 sections).
fn generate_area_document() -> String {
    let distribution = [(1, 5), (2, 4), (3, 2), (4, 2), (5, 2), (6, 2)];
    let mut doc = String::new();
    for (objetivo, count) in distribution {
        doc.push_str(&format!("OBJETIVO {objetivo}: Objetivo {objetivo}\n"));
        for accion in 1..=count {
            doc.push_str(&format!("\tACCIÓN {accion}: Acción {accion}\n"));
            doc.push_str("\tPREGUNTAS ABIERTAS: ¿Pregunta inicial?\n");
            doc.push_str("\tAUTOEVALUACIÓN\n");
            for dimension in ["COBERTURA", "FRECUENCIA", "PROFUNDIDAD"] {
                doc.push_str(&format!("{dimension}:\n"));
                doc.push_str("\tPREGUNTAS ABIERTAS\n\t¿Pregunta de dimensión?\n");
                doc.push_str("\tAUTOEVALUACIÓN\n");
                doc.push_str("\tIncipiente: a\n\tEn desarrollo: b\n");
                doc.push_str("\tAvanzado: c\n\tConsolidado: d\n");
            }
        }
    }
    doc
}

fn bench_parse_area_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = generate_area_document();
    group.bench_function("aprendizaje_document", |b| {
        b.iter(|| {
            let parsed = parse(std::hint::black_box(&content), "aprendizaje").unwrap();
            std::hint::black_box(parsed);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_area_document);
criterion_main!(benches);
