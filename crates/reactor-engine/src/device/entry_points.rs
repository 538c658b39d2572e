//! Entry point lists resolved by the GL bind.

/// OpenGL 4.1 core entry points required by the shader, buffer, texture and
/// draw paths. Any of these missing fails the bind.
pub const GL_CORE_ENTRY_POINTS: &[&str] = &[
    // state
    "glGetError",
    "glGetString",
    "glGetStringi",
    "glGetIntegerv",
    "glEnable",
    "glDisable",
    "glViewport",
    "glScissor",
    "glClear",
    "glClearColor",
    "glClearDepth",
    "glBlendFunc",
    "glBlendFuncSeparate",
    "glBlendEquation",
    "glDepthFunc",
    "glDepthMask",
    "glCullFace",
    "glFrontFace",
    "glColorMask",
    "glPixelStorei",
    "glFlush",
    "glFinish",
    // shaders & programs
    "glCreateShader",
    "glShaderSource",
    "glCompileShader",
    "glGetShaderiv",
    "glGetShaderInfoLog",
    "glDeleteShader",
    "glShaderBinary",
    "glCreateProgram",
    "glAttachShader",
    "glDetachShader",
    "glLinkProgram",
    "glValidateProgram",
    "glGetProgramiv",
    "glGetProgramInfoLog",
    "glUseProgram",
    "glDeleteProgram",
    "glProgramParameteri",
    "glGetProgramBinary",
    "glProgramBinary",
    "glBindAttribLocation",
    "glBindFragDataLocation",
    "glGetAttribLocation",
    "glGetUniformLocation",
    "glGetUniformBlockIndex",
    "glUniformBlockBinding",
    "glUniform1i",
    "glUniform1f",
    "glUniform2f",
    "glUniform3f",
    "glUniform4f",
    "glUniform1iv",
    "glUniform4fv",
    "glUniformMatrix3fv",
    "glUniformMatrix4fv",
    // buffers & vertex arrays
    "glGenBuffers",
    "glBindBuffer",
    "glBindBufferBase",
    "glBindBufferRange",
    "glBufferData",
    "glBufferSubData",
    "glMapBufferRange",
    "glUnmapBuffer",
    "glDeleteBuffers",
    "glGenVertexArrays",
    "glBindVertexArray",
    "glDeleteVertexArrays",
    "glEnableVertexAttribArray",
    "glDisableVertexAttribArray",
    "glVertexAttribPointer",
    "glVertexAttribIPointer",
    "glVertexAttribDivisor",
    // textures & samplers
    "glGenTextures",
    "glBindTexture",
    "glActiveTexture",
    "glTexImage2D",
    "glTexSubImage2D",
    "glTexParameteri",
    "glGenerateMipmap",
    "glDeleteTextures",
    "glGenSamplers",
    "glBindSampler",
    "glSamplerParameteri",
    "glDeleteSamplers",
    // framebuffers
    "glGenFramebuffers",
    "glBindFramebuffer",
    "glFramebufferTexture2D",
    "glCheckFramebufferStatus",
    "glDrawBuffers",
    "glBlitFramebuffer",
    "glDeleteFramebuffers",
    "glGenRenderbuffers",
    "glBindRenderbuffer",
    "glRenderbufferStorage",
    "glFramebufferRenderbuffer",
    "glDeleteRenderbuffers",
    // draw
    "glDrawArrays",
    "glDrawElements",
    "glDrawArraysInstanced",
    "glDrawElementsInstanced",
    "glDrawElementsBaseVertex",
    // sync
    "glFenceSync",
    "glClientWaitSync",
    "glDeleteSync",
];

/// Debug and labelling entry points. Resolved when present; their absence is
/// not an error.
pub const GL_DEBUG_ENTRY_POINTS: &[&str] = &[
    "glDebugMessageCallback",
    "glDebugMessageControl",
    "glObjectLabel",
    "glPushDebugGroup",
    "glPopDebugGroup",
];
