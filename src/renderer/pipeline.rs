//! WebGPU render state and pipelines
//!
//! One render pass per frame: lit meshes, matcap meshes, then the line field.
//! Mesh geometry is uploaded once; per-node uniforms and the line vertices are
//! rewritten every frame from the scene and animation state.

use bytemuck::{Pod, Zeroable};
use glam::{EulerRot, Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::anim::{AnimState, LineColor};
use crate::config::SceneParams;
use crate::consts::*;
use crate::hex_color;
use crate::renderer::vertex::{LineVertex, MeshVertex};
use crate::scene::{Material, Scene};

/// Background clear color (linear)
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.92,
    g: 0.89,
    b: 0.86,
    a: 1.0,
};

/// Placeholder matcap texel until the real texture arrives (muted gold)
const MATCAP_PLACEHOLDER: [u8; 4] = [0xd4, 0xaf, 0x37, 0xff];

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

// ============================================================================
// GPU DATA STRUCTURES (must match shader)
// ============================================================================

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    hemi_sky: [f32; 4], // rgb, intensity in w
    hemi_ground: [f32; 4],
    dir0: [f32; 4], // xyz: unit vector toward the light
    dir0_color: [f32; 4],
    dir1: [f32; 4],
    dir1_color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct NodeUniform {
    model: [[f32; 4]; 4],
    normal_mat: [[f32; 4]; 4],
    base_color: [f32; 4],
    // x: roughness, y: metalness, z: use vertex color, w: specular enabled
    params: [f32; 4],
}

impl NodeUniform {
    fn new(model: Mat4, material: &Material) -> Self {
        let (base_color, params) = match *material {
            Material::Standard {
                color,
                roughness,
                metalness,
            } => (color, [roughness, metalness, 0.0, 1.0]),
            Material::Lambert { color } => (color, [1.0, 0.0, 0.0, 0.0]),
            Material::VertexColors {
                roughness,
                metalness,
            } => ([1.0, 1.0, 1.0], [roughness, metalness, 1.0, 1.0]),
            // Shading comes entirely from the sampled texture
            Material::Matcap => ([1.0, 1.0, 1.0], [0.0; 4]),
        };
        Self {
            model: model.to_cols_array_2d(),
            normal_mat: model.inverse().transpose().to_cols_array_2d(),
            base_color: [base_color[0], base_color[1], base_color[2], 1.0],
            params,
        }
    }
}

/// Uploaded mesh geometry
struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

// ============================================================================
// RENDER STATE
// ============================================================================

pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: (u32, u32),

    mesh_pipeline: wgpu::RenderPipeline,
    matcap_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,

    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,

    meshes: Vec<GpuMesh>,
    node_buffers: Vec<wgpu::Buffer>,
    node_bind_groups: Vec<wgpu::BindGroup>,

    line_buffer: wgpu::Buffer,
    line_count: u32,
    dots_per_line: u32,
    line_colors: [[f32; 3]; 2],

    depth_view: wgpu::TextureView,

    matcap_layout: wgpu::BindGroupLayout,
    matcap_sampler: wgpu::Sampler,
    matcap_bind_group: wgpu::BindGroup,
    matcap_loaded: bool,
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
        scene: &Scene,
        params: &SceneParams,
    ) -> Self {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("scene-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await
            .expect("Failed to create device");

        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);
        log::info!("Using surface format: {:?}", surface_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        // Globals
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bind_group"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        // Per-node uniforms
        let node_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("node_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let mut node_buffers = Vec::with_capacity(scene.nodes.len());
        let mut node_bind_groups = Vec::with_capacity(scene.nodes.len());
        for node in &scene.nodes {
            let buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(node.name),
                size: std::mem::size_of::<NodeUniform>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            node_bind_groups.push(device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(node.name),
                layout: &node_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            }));
            node_buffers.push(buffer);
        }

        // Matcap texture slot: 1x1 placeholder until the fetch lands
        let matcap_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("matcap_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let matcap_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("matcap_sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let placeholder = Self::create_matcap_texture(&device, 1, 1);
        queue.write_texture(
            placeholder.as_image_copy(),
            &MATCAP_PLACEHOLDER,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4),
                rows_per_image: None,
            },
            wgpu::Extent3d {
                width: 1,
                height: 1,
                depth_or_array_layers: 1,
            },
        );
        let matcap_bind_group =
            Self::create_matcap_bind_group(&device, &matcap_layout, &placeholder, &matcap_sampler);

        // Pipelines
        let mesh_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pipeline_layout"),
            bind_group_layouts: &[&globals_layout, &node_layout],
            immediate_size: 0,
        });
        let matcap_pipe_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("matcap_pipeline_layout"),
            bind_group_layouts: &[&globals_layout, &node_layout, &matcap_layout],
            immediate_size: 0,
        });
        let line_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("line_pipeline_layout"),
            bind_group_layouts: &[&globals_layout],
            immediate_size: 0,
        });

        let mesh_pipeline = Self::create_pipeline(
            &device,
            &shader,
            &mesh_layout,
            surface_format,
            "vs_mesh",
            "fs_mesh",
            MeshVertex::desc(),
            wgpu::PrimitiveTopology::TriangleList,
        );
        let matcap_pipeline = Self::create_pipeline(
            &device,
            &shader,
            &matcap_pipe_layout,
            surface_format,
            "vs_matcap",
            "fs_matcap",
            MeshVertex::desc(),
            wgpu::PrimitiveTopology::TriangleList,
        );
        let line_pipeline = Self::create_pipeline(
            &device,
            &shader,
            &line_layout,
            surface_format,
            "vs_line",
            "fs_line",
            LineVertex::desc(),
            wgpu::PrimitiveTopology::LineStrip,
        );

        // Static mesh geometry
        let meshes = scene
            .meshes
            .iter()
            .map(|mesh| {
                let vertices: Vec<MeshVertex> = mesh
                    .positions
                    .iter()
                    .zip(&mesh.normals)
                    .zip(&mesh.colors)
                    .map(|((p, n), c)| MeshVertex {
                        position: p.to_array(),
                        normal: n.to_array(),
                        color: *c,
                    })
                    .collect();
                GpuMesh {
                    vertex_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("mesh_vb"),
                        contents: bytemuck::cast_slice(&vertices),
                        usage: wgpu::BufferUsages::VERTEX,
                    }),
                    index_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("mesh_ib"),
                        contents: bytemuck::cast_slice(&mesh.indices),
                        usage: wgpu::BufferUsages::INDEX,
                    }),
                    index_count: mesh.indices.len() as u32,
                }
            })
            .collect();

        // Line strip buffer, rewritten every frame
        let line_count = params.lines as u32;
        let dots_per_line = params.line_dots as u32;
        let line_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("line_vb"),
            size: (std::mem::size_of::<LineVertex>() as u32 * line_count * dots_per_line) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let line_colors = [hex_color(params.color1), hex_color(params.color2)];

        let depth_view = Self::create_depth_view(&device, width, height);

        Self {
            surface,
            device,
            queue,
            config,
            size: (width, height),
            mesh_pipeline,
            matcap_pipeline,
            line_pipeline,
            globals_buffer,
            globals_bind_group,
            meshes,
            node_buffers,
            node_bind_groups,
            line_buffer,
            line_count,
            dots_per_line,
            line_colors,
            depth_view,
            matcap_layout,
            matcap_sampler,
            matcap_bind_group,
            matcap_loaded: false,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn create_pipeline(
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
        layout: &wgpu::PipelineLayout,
        format: wgpu::TextureFormat,
        vs: &str,
        fs: &str,
        vertex_layout: wgpu::VertexBufferLayout<'static>,
        topology: wgpu::PrimitiveTopology,
    ) -> wgpu::RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(vs),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some(vs),
                buffers: &[vertex_layout],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some(fs),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                // Open shapes (cones, discs) must read correctly from behind
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        })
    }

    fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn create_matcap_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::Texture {
        device.create_texture(&wgpu::TextureDescriptor {
            label: Some("matcap"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST
                | wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        })
    }

    fn create_matcap_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        texture: &wgpu::Texture,
        sampler: &wgpu::Sampler,
    ) -> wgpu::BindGroup {
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("matcap_bind_group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        })
    }

    /// Swap the placeholder matcap for the fetched image. Arriving late (or
    /// never) is fine; frames keep rendering with the placeholder tint.
    #[cfg(target_arch = "wasm32")]
    pub fn install_matcap(&mut self, bitmap: &web_sys::ImageBitmap) {
        let (width, height) = (bitmap.width(), bitmap.height());
        if width == 0 || height == 0 {
            log::warn!("Matcap bitmap is empty; keeping placeholder");
            return;
        }
        let texture = Self::create_matcap_texture(&self.device, width, height);
        self.queue.copy_external_image_to_texture(
            &wgpu::CopyExternalImageSourceInfo {
                source: wgpu::ExternalImageSource::ImageBitmap(bitmap.clone()),
                origin: wgpu::Origin2d::ZERO,
                flip_y: false,
            },
            wgpu::CopyExternalImageDestInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
                color_space: wgpu::PredefinedColorSpace::Srgb,
                premultiplied_alpha: false,
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
        self.matcap_bind_group = Self::create_matcap_bind_group(
            &self.device,
            &self.matcap_layout,
            &texture,
            &self.matcap_sampler,
        );
        self.matcap_loaded = true;
        log::info!("Matcap texture installed ({}x{})", width, height);
    }

    pub fn matcap_loaded(&self) -> bool {
        self.matcap_loaded
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
            self.depth_view = Self::create_depth_view(&self.device, new_width, new_height);
        }
    }

    /// Update GPU buffers from the scene and animation state, then draw
    pub fn render(&mut self, scene: &Scene, anim: &AnimState) -> Result<(), wgpu::SurfaceError> {
        // Globals
        let camera = &scene.camera;
        let view = Mat4::look_at_rh(camera.position, camera.target, Vec3::Y);
        let lights = &scene.lights;
        let dir0 = lights.directionals[0].position.normalize();
        let dir1 = lights.directionals[1].position.normalize();
        let globals = Globals {
            view_proj: camera.view_proj().to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            camera_pos: camera.position.extend(1.0).to_array(),
            hemi_sky: [
                lights.hemisphere.sky[0],
                lights.hemisphere.sky[1],
                lights.hemisphere.sky[2],
                lights.hemisphere.intensity,
            ],
            hemi_ground: [
                lights.hemisphere.ground[0],
                lights.hemisphere.ground[1],
                lights.hemisphere.ground[2],
                0.0,
            ],
            dir0: dir0.extend(0.0).to_array(),
            dir0_color: [
                lights.directionals[0].color[0],
                lights.directionals[0].color[1],
                lights.directionals[0].color[2],
                lights.directionals[0].intensity,
            ],
            dir1: dir1.extend(0.0).to_array(),
            dir1_color: [
                lights.directionals[1].color[0],
                lights.directionals[1].color[1],
                lights.directionals[1].color[2],
                lights.directionals[1].intensity,
            ],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        // Per-node uniforms
        for (node, buffer) in scene.nodes.iter().zip(&self.node_buffers) {
            let uniform = NodeUniform::new(node.transform.matrix(), &node.material);
            self.queue
                .write_buffer(buffer, 0, bytemuck::bytes_of(&uniform));
        }

        // Line field vertices, transformed to world space on the CPU
        let group = Mat4::from_translation(Vec3::new(0.0, LINE_GROUP_Y, 0.0));
        let mut line_vertices =
            Vec::with_capacity((self.line_count * self.dots_per_line) as usize);
        for line in &anim.field.lines {
            let model = group
                * Mat4::from_euler(
                    EulerRot::XYZ,
                    line.rotation.x,
                    line.rotation.y,
                    line.rotation.z,
                );
            let color = match line.color {
                LineColor::Primary => self.line_colors[0],
                LineColor::Secondary => self.line_colors[1],
            };
            for dot in &line.dots {
                let world = model.transform_point3(Vec3::new(dot.x, dot.y, 0.0));
                line_vertices.push(LineVertex {
                    position: world.to_array(),
                    color,
                });
            }
        }
        self.queue
            .write_buffer(&self.line_buffer, 0, bytemuck::cast_slice(&line_vertices));

        // Render
        let output = self.surface.get_current_texture()?;
        let target = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("scene_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            render_pass.set_bind_group(0, &self.globals_bind_group, &[]);

            // Lit meshes
            render_pass.set_pipeline(&self.mesh_pipeline);
            for (i, node) in scene.nodes.iter().enumerate() {
                if matches!(node.material, Material::Matcap) {
                    continue;
                }
                let mesh = &self.meshes[node.mesh];
                render_pass.set_bind_group(1, &self.node_bind_groups[i], &[]);
                render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                render_pass
                    .set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }

            // Matcap meshes
            render_pass.set_pipeline(&self.matcap_pipeline);
            render_pass.set_bind_group(2, &self.matcap_bind_group, &[]);
            for (i, node) in scene.nodes.iter().enumerate() {
                if !matches!(node.material, Material::Matcap) {
                    continue;
                }
                let mesh = &self.meshes[node.mesh];
                render_pass.set_bind_group(1, &self.node_bind_groups[i], &[]);
                render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                render_pass
                    .set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }

            // Line strips, one draw per line so strips do not connect
            render_pass.set_pipeline(&self.line_pipeline);
            render_pass.set_vertex_buffer(0, self.line_buffer.slice(..));
            for i in 0..self.line_count {
                let start = i * self.dots_per_line;
                render_pass.draw(start..start + self.dots_per_line, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
