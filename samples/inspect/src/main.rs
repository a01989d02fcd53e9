use std::process::ExitCode;

use clap::Parser;
use tessera::{mesh::Node, Model};

mod cli;

fn describe(model: &Model, node: &Node) {
    let t = &node.transform;
    println!("{}", node.name);
    println!("  translation: {:?}", t.translation.as_slice());
    println!("  rotation:    {:?}", t.rotation_xyzw());
    println!("  scale:       {:?}", t.scale.as_slice());
    let Some(mesh) = &node.mesh else {
        return;
    };
    println!(
        "  mesh {:?}: {} primitive(s), {} buffer(s), {} material(s)",
        mesh.name,
        mesh.primitives.len(),
        mesh.buffers.len(),
        mesh.materials.len()
    );
    for (i, prim) in mesh.primitives.iter().enumerate() {
        let material = mesh.material_of(prim).map_or("<none>", |m| m.name.as_str());
        println!(
            "    [{i}] {:?}, {} indices, material {material}",
            prim.mode(),
            prim.indices().len()
        );
        for (usage, info) in [("position", prim.position()), ("normal", prim.normal())] {
            let Some(info) = info else { continue };
            println!(
                "        {usage}: {} x {:?}[{}], buffer {} @ {}, bounds {:?}..{:?}",
                info.count,
                info.component_type,
                info.component_count,
                info.buffer,
                info.byte_offset,
                info.min_bounds,
                info.max_bounds
            );
        }
    }
    tracing::debug!(asset = ?model.asset(), "described node {}", node.name);
}

fn main() -> ExitCode {
    let args = cli::Cli::parse();
    cli::initialize_tracing(&args.log_filter, args.log_format);

    let model = match Model::open(&args.model) {
        Ok(model) => model,
        Err(e) => {
            tracing::error!(path = ?args.model, "{e}");
            return ExitCode::FAILURE;
        }
    };

    if args.list {
        for name in model.node_names() {
            println!("{name}");
        }
    }

    let mut status = ExitCode::SUCCESS;
    for name in &args.nodes {
        match model.build_node(name) {
            Ok(node) => describe(&model, &node),
            Err(e) => {
                tracing::error!(node = %name, "{e}");
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
