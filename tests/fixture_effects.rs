//! Compiles the curated fixtures and checks the resolved descriptors
//!
//! Valid fixtures are verified with the fluent `assert_effect` API; invalid fixtures are
//! checked for the stage that rejects them and the position it reports.

use effect::effect::descriptors::{
    BlendFactor, Colour, CompareFunc, Filtering, IterationMode, LightType, MaterialSource,
    SortGroup, TextureFilter, TextureReference, TextureType, TransformOp,
};
use effect::effect::range::Position;
use effect::effect::testing::{assert_effect, EffectSources};
use effect::{CompileError, ErrorKind};
use rstest::rstest;

#[test]
fn test_basic_scenario() {
    let effect = EffectSources::compile("basic.fx");

    assert_effect(&effect)
        .name("basic")
        .technique_count(1)
        .technique(0, |technique| {
            technique.pass_count(1).pass(0, |pass| {
                pass.ambient(Colour::rgba(1.0, 1.0, 1.0, 1.0))
                    .blend(BlendFactor::One, BlendFactor::One)
                    .texture_unit_count(0);
            });
        });
}

#[test]
fn test_glass() {
    let effect = EffectSources::compile("glass.fx");

    assert_effect(&effect)
        .name("glass")
        .shadows(false, true)
        .technique_count(2)
        .technique(0, |technique| {
            technique
                .lod_level(0)
                .sort(SortGroup::Transparent)
                .shadows(false, true)
                .pass(0, |pass| {
                    pass.diffuse(Colour::rgba(0.9, 0.95, 1.0, 0.35))
                        .blend(BlendFactor::SrcAlpha, BlendFactor::InvSrcAlpha)
                        .depth(true, false)
                        .lighting(true)
                        .texture_unit_count(2)
                        .texture_unit(0, |unit| {
                            unit.texture(TextureType::Texture2D, "glass_diffuse.png")
                                .filtering(Filtering::new(
                                    TextureFilter::Linear,
                                    TextureFilter::Linear,
                                    TextureFilter::Linear,
                                ));
                        })
                        .texture_unit(1, |unit| {
                            unit.texture(TextureType::CubeMap, "sky_env")
                                .max_anisotropy(8)
                                .filtering(Filtering::new(
                                    TextureFilter::Anisotropic,
                                    TextureFilter::Anisotropic,
                                    TextureFilter::Linear,
                                ));
                        });
                });
        })
        .technique(1, |technique| {
            technique.lod_level(2).shadows(false, false).pass(0, |pass| {
                pass.blend(BlendFactor::SrcAlpha, BlendFactor::InvSrcAlpha)
                    .depth(false, true);
            });
        });

    assert_eq!(
        effect.texture_references(),
        vec![
            TextureReference {
                texture_type: TextureType::Texture2D,
                name: "glass_diffuse.png".to_string(),
            },
            TextureReference {
                texture_type: TextureType::CubeMap,
                name: "sky_env".to_string(),
            },
        ]
    );
}

#[rstest]
#[case(0, 0)]
#[case(1, 0)]
#[case(2, 2)]
#[case(9, 2)]
fn test_glass_lod_selection(#[case] lod: u32, #[case] expected: u32) {
    let effect = EffectSources::compile("glass.fx");
    let technique = effect.best_technique_for_lod(lod).expect("has techniques");
    assert_eq!(technique.lod_level, expected);
}

#[test]
fn test_terrain() {
    let effect = EffectSources::compile("terrain.fx");

    assert_effect(&effect)
        .technique_count(2)
        .technique(0, |technique| {
            technique
                .pass_count(2)
                .pass(0, |pass| {
                    let material = &pass.pass().material_sources;
                    assert_eq!(material.diffuse, MaterialSource::VertexColour);
                    assert_eq!(material.ambient, MaterialSource::Material);

                    pass.ambient(Colour::rgba(0.3, 0.3, 0.3, 1.0))
                        .no_blend()
                        .texture_unit_count(2)
                        .texture_unit(0, |unit| {
                            unit.filtering(Filtering::new(
                                TextureFilter::Linear,
                                TextureFilter::Linear,
                                TextureFilter::Point,
                            ))
                            .transform_count(1)
                            .animated(false);
                        })
                        .texture_unit(1, |unit| {
                            unit.texture(TextureType::Texture2D, "detail.png").coord_set(1);
                        });
                })
                .pass(1, |pass| {
                    let state = pass.pass();
                    assert_eq!(
                        state.iteration.map(|it| (it.mode, it.light_type)),
                        Some((IterationMode::OncePerLight, LightType::Point))
                    );
                    assert!(state.fog.override_scene);
                    assert_eq!(state.fog.density, 0.25);
                    assert_eq!(state.depth.bias, 1.5);

                    pass.max_lights(4).blend(BlendFactor::One, BlendFactor::One);
                });
        })
        .technique(1, |technique| {
            technique.lod_level(1).pass(0, |pass| {
                pass.texture_unit_count(1);
            });
        });
}

#[test]
fn test_water_animation() {
    let effect = EffectSources::compile("water.fx");

    assert_effect(&effect).technique(0, |technique| {
        technique.shadows(false, true).pass(0, |pass| {
            let stencil = pass.pass().stencil;
            assert!(stencil.enabled);
            assert_eq!(stencil.func, CompareFunc::Equal);
            assert_eq!((stencil.reference, stencil.mask), (1, 255));

            pass.alpha_test(CompareFunc::GreaterEqual, 0.1)
                .blend(BlendFactor::One, BlendFactor::InvSrcAlpha)
                .texture_unit(0, |unit| {
                    let state = unit.unit();
                    unit.transform_count(3).animated(true);

                    assert!(matches!(state.transforms[0], TransformOp::ScrollAnim(_)));
                    let at_rest = state.transform_at(0.0);
                    assert_eq!(at_rest.scroll.x, 0.0);
                    assert!((at_rest.scale.x - (1.0 + 0.1 * 0.5_f32.sqrt())).abs() < 1e-4);
                    assert_eq!(at_rest.scale.y, 1.0);

                    let later = state.transform_at(2.0);
                    assert!((later.scroll.x - 0.1).abs() < 1e-6);
                    assert!((later.rotate - 0.02).abs() < 1e-6);
                });
        });
    });
}

#[rstest]
#[case("invalid/unterminated_pass.fx", ErrorKind::Syntax, Position::new(4, 0))]
#[case("invalid/bad_colourop.fx", ErrorKind::Syntax, Position::new(4, 25))]
#[case("invalid/too_many_units.fx", ErrorKind::Semantic, Position::new(11, 12))]
#[case("invalid/stray_character.fx", ErrorKind::Lexical, Position::new(2, 27))]
fn test_invalid_fixtures(#[case] name: &str, #[case] kind: ErrorKind, #[case] at: Position) {
    let error = EffectSources::try_compile(name)
        .expect("fixture exists")
        .expect_err("fixture is invalid");

    assert_eq!(error.kind(), kind, "{}", error);
    assert_eq!(error.position(), Some(at), "{}", error);
}

#[test]
fn test_bad_colourop_lists_every_operation() {
    let error = EffectSources::try_compile("invalid/bad_colourop.fx")
        .expect("fixture exists")
        .expect_err("fixture is invalid");

    match error {
        CompileError::Syntax(syntax) => {
            assert_eq!(syntax.expected.len(), 21);
            assert!(syntax.to_string().contains("modulate2x"));
        }
        other => panic!("Expected a syntax error, got {}", other),
    }
}

#[test]
fn test_every_valid_fixture_has_techniques_and_passes() {
    for name in EffectSources::list().expect("fixtures directory") {
        let effect = EffectSources::compile(&name);
        assert!(!effect.techniques.is_empty(), "{} has no techniques", name);
        for technique in &effect.techniques {
            assert!(!technique.passes.is_empty(), "{} has an empty technique", name);
        }
    }
}
