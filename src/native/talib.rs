//! TA-Lib engine
//!
//! Loads the TA-Lib shared library at runtime and drives it through its
//! abstract interface, so one code path serves every indicator: look up the
//! function by name, bind inputs/options/outputs by parameter name, call.

use std::env;
use std::ffi::{c_char, c_double, c_int, c_uint, c_void, CStr, CString};
use std::path::PathBuf;

use libloading::Library;
use tracing::{debug, warn};

use super::{Engine, NativeCall, NativeOutputs, OptValue, OutputValues};
use crate::common::{align, nan_vec};
use crate::error::{Error, Result};

/// Environment variable holding extra library locations (platform path list).
pub const LIBRARY_PATH_ENV: &str = "TA_LIB_PATH";

const TA_SUCCESS: c_int = 0;

// TA_InputParameterType
const TA_INPUT_PRICE: c_int = 0;
const TA_INPUT_REAL: c_int = 1;

// TA_OptInputParameterType
const TA_OPTINPUT_REAL_RANGE: c_int = 0;
const TA_OPTINPUT_REAL_LIST: c_int = 1;

// TA_OutputParameterType
const TA_OUTPUT_REAL: c_int = 0;
const TA_OUTPUT_INTEGER: c_int = 1;

// TA_InputFlags for price inputs
const TA_IN_PRICE_OPEN: c_int = 0x01;
const TA_IN_PRICE_HIGH: c_int = 0x02;
const TA_IN_PRICE_LOW: c_int = 0x04;
const TA_IN_PRICE_CLOSE: c_int = 0x08;
const TA_IN_PRICE_VOLUME: c_int = 0x10;
const TA_IN_PRICE_OPENINTEREST: c_int = 0x20;

type FuncHandle = c_void;
type ParamHolder = c_void;

#[repr(C)]
#[allow(dead_code)]
struct FuncInfo {
    name: *const c_char,
    group: *const c_char,
    hint: *const c_char,
    camel_case_name: *const c_char,
    flags: c_int,
    nb_input: c_uint,
    nb_opt_input: c_uint,
    nb_output: c_uint,
    handle: *const FuncHandle,
}

#[repr(C)]
#[allow(dead_code)]
struct InputParameterInfo {
    kind: c_int,
    param_name: *const c_char,
    flags: c_int,
}

#[repr(C)]
#[allow(dead_code)]
struct OptInputParameterInfo {
    kind: c_int,
    param_name: *const c_char,
    flags: c_int,
    display_name: *const c_char,
    data_set: *const c_void,
    default_value: c_double,
    hint: *const c_char,
    help_file: *const c_char,
}

#[repr(C)]
#[allow(dead_code)]
struct OutputParameterInfo {
    kind: c_int,
    param_name: *const c_char,
    flags: c_int,
}

type InitializeFn = unsafe extern "C" fn() -> c_int;
type GetFuncHandleFn = unsafe extern "C" fn(*const c_char, *mut *const FuncHandle) -> c_int;
type GetFuncInfoFn = unsafe extern "C" fn(*const FuncHandle, *mut *const FuncInfo) -> c_int;
type GetInputInfoFn =
    unsafe extern "C" fn(*const FuncHandle, c_uint, *mut *const InputParameterInfo) -> c_int;
type GetOptInputInfoFn =
    unsafe extern "C" fn(*const FuncHandle, c_uint, *mut *const OptInputParameterInfo) -> c_int;
type GetOutputInfoFn =
    unsafe extern "C" fn(*const FuncHandle, c_uint, *mut *const OutputParameterInfo) -> c_int;
type ParamHolderAllocFn = unsafe extern "C" fn(*const FuncHandle, *mut *mut ParamHolder) -> c_int;
type ParamHolderFreeFn = unsafe extern "C" fn(*mut ParamHolder) -> c_int;
type SetInputRealPtrFn = unsafe extern "C" fn(*mut ParamHolder, c_uint, *const c_double) -> c_int;
type SetInputPricePtrFn = unsafe extern "C" fn(
    *mut ParamHolder,
    c_uint,
    *const c_double,
    *const c_double,
    *const c_double,
    *const c_double,
    *const c_double,
    *const c_double,
) -> c_int;
type SetOptIntegerFn = unsafe extern "C" fn(*mut ParamHolder, c_uint, c_int) -> c_int;
type SetOptRealFn = unsafe extern "C" fn(*mut ParamHolder, c_uint, c_double) -> c_int;
type SetOutputRealPtrFn = unsafe extern "C" fn(*mut ParamHolder, c_uint, *mut c_double) -> c_int;
type SetOutputIntegerPtrFn = unsafe extern "C" fn(*mut ParamHolder, c_uint, *mut c_int) -> c_int;
type CallFuncFn =
    unsafe extern "C" fn(*const ParamHolder, c_int, c_int, *mut c_int, *mut c_int) -> c_int;

/// Where to look for the TA-Lib shared library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaLibConfig {
    pub library_paths: Vec<PathBuf>,
}

impl Default for TaLibConfig {
    fn default() -> Self {
        Self {
            library_paths: default_library_names().iter().map(PathBuf::from).collect(),
        }
    }
}

impl TaLibConfig {
    /// Paths from [`LIBRARY_PATH_ENV`] first, then the platform defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(extra) = env::var_os(LIBRARY_PATH_ENV) {
            let mut paths: Vec<PathBuf> = env::split_paths(&extra).collect();
            paths.append(&mut config.library_paths);
            config.library_paths = paths;
        }
        config
    }

    /// Try `path` before anything else.
    pub fn with_library(mut self, path: impl Into<PathBuf>) -> Self {
        self.library_paths.insert(0, path.into());
        self
    }
}

fn default_library_names() -> &'static [&'static str] {
    if cfg!(target_os = "macos") {
        &["libta-lib.dylib", "libta-lib.0.dylib", "libta_lib.dylib", "libta_lib.0.dylib"]
    } else if cfg!(target_os = "windows") {
        &["ta-lib.dll", "ta_lib.dll", "libta-lib.dll"]
    } else {
        &["libta-lib.so", "libta-lib.so.0", "libta_lib.so", "libta_lib.so.0"]
    }
}

struct Api {
    get_func_handle: GetFuncHandleFn,
    get_func_info: GetFuncInfoFn,
    get_input_info: GetInputInfoFn,
    get_opt_input_info: GetOptInputInfoFn,
    get_output_info: GetOutputInfoFn,
    param_holder_alloc: ParamHolderAllocFn,
    param_holder_free: ParamHolderFreeFn,
    set_input_real_ptr: SetInputRealPtrFn,
    set_input_price_ptr: SetInputPricePtrFn,
    set_opt_integer: SetOptIntegerFn,
    set_opt_real: SetOptRealFn,
    set_output_real_ptr: SetOutputRealPtrFn,
    set_output_integer_ptr: SetOutputIntegerPtrFn,
    call_func: CallFuncFn,
}

struct Loaded {
    // Keeps the function pointers in `api` valid.
    _library: Library,
    api: Api,
    path: PathBuf,
}

/// Engine backed by the TA-Lib shared library.
///
/// Construction never fails: when no candidate path loads, the engine
/// reports itself unavailable and every call returns [`Error::NotInstalled`].
pub struct TaLib {
    loaded: Option<Loaded>,
}

impl TaLib {
    /// Load using [`TaLibConfig::from_env`].
    pub fn load() -> Self {
        Self::with_config(&TaLibConfig::from_env())
    }

    pub fn with_config(config: &TaLibConfig) -> Self {
        for path in &config.library_paths {
            match load_from(path) {
                Ok(loaded) => {
                    debug!(path = %path.display(), "loaded TA-Lib");
                    return Self {
                        loaded: Some(loaded),
                    };
                }
                Err(e) => debug!(path = %path.display(), error = %e, "TA-Lib candidate rejected"),
            }
        }
        warn!("TA-Lib shared library not found; indicator calls will fail");
        Self { loaded: None }
    }

    /// An engine that never loaded anything.
    pub fn unavailable() -> Self {
        Self { loaded: None }
    }

    /// Path of the loaded library, if any.
    pub fn library_path(&self) -> Option<&std::path::Path> {
        self.loaded.as_ref().map(|l| l.path.as_path())
    }
}

impl std::fmt::Debug for TaLib {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaLib")
            .field("library", &self.library_path())
            .finish()
    }
}

fn load_from(path: &PathBuf) -> std::result::Result<Loaded, libloading::Error> {
    // SAFETY: loading TA-Lib runs no initialization code beyond the C runtime's.
    let library = unsafe { Library::new(path)? };
    // SAFETY: every symbol is looked up with its documented C signature.
    let (api, init) = unsafe {
        // Look up the entry point the facade depends on first.
        let _sma = library.get::<unsafe extern "C" fn()>(b"TA_SMA\0")?;
        let api = Api {
            get_func_handle: *library.get::<GetFuncHandleFn>(b"TA_GetFuncHandle\0")?,
            get_func_info: *library.get::<GetFuncInfoFn>(b"TA_GetFuncInfo\0")?,
            get_input_info: *library.get::<GetInputInfoFn>(b"TA_GetInputParameterInfo\0")?,
            get_opt_input_info: *library
                .get::<GetOptInputInfoFn>(b"TA_GetOptInputParameterInfo\0")?,
            get_output_info: *library.get::<GetOutputInfoFn>(b"TA_GetOutputParameterInfo\0")?,
            param_holder_alloc: *library.get::<ParamHolderAllocFn>(b"TA_ParamHolderAlloc\0")?,
            param_holder_free: *library.get::<ParamHolderFreeFn>(b"TA_ParamHolderFree\0")?,
            set_input_real_ptr: *library.get::<SetInputRealPtrFn>(b"TA_SetInputParamRealPtr\0")?,
            set_input_price_ptr: *library.get::<SetInputPricePtrFn>(b"TA_SetInputParamPricePtr\0")?,
            set_opt_integer: *library.get::<SetOptIntegerFn>(b"TA_SetOptInputParamInteger\0")?,
            set_opt_real: *library.get::<SetOptRealFn>(b"TA_SetOptInputParamReal\0")?,
            set_output_real_ptr: *library.get::<SetOutputRealPtrFn>(b"TA_SetOutputParamRealPtr\0")?,
            set_output_integer_ptr: *library
                .get::<SetOutputIntegerPtrFn>(b"TA_SetOutputParamIntegerPtr\0")?,
            call_func: *library.get::<CallFuncFn>(b"TA_CallFunc\0")?,
        };
        let init = *library.get::<InitializeFn>(b"TA_Initialize\0")?;
        (api, init)
    };
    // SAFETY: TA_Initialize takes no arguments and is idempotent.
    let code = unsafe { init() };
    if code != TA_SUCCESS {
        warn!(code, "TA_Initialize returned an error");
    }
    Ok(Loaded {
        _library: library,
        api,
        path: path.clone(),
    })
}

/// Frees the parameter holder on every exit path.
struct HolderGuard<'a> {
    api: &'a Api,
    holder: *mut ParamHolder,
}

impl Drop for HolderGuard<'_> {
    fn drop(&mut self) {
        // SAFETY: holder came from TA_ParamHolderAlloc and is freed exactly once.
        unsafe {
            (self.api.param_holder_free)(self.holder);
        }
    }
}

enum Buffer {
    Real(Vec<f64>),
    Integer(Vec<i32>),
}

fn check(function: &str, code: c_int) -> Result<()> {
    if code == TA_SUCCESS {
        Ok(())
    } else {
        Err(Error::Native {
            function: function.to_string(),
            code,
        })
    }
}

/// # Safety
/// `ptr` must be null or point at a NUL-terminated string.
unsafe fn c_name(ptr: *const c_char) -> String {
    if ptr.is_null() {
        String::new()
    } else {
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    }
}

fn price_component<'a>(
    call: &NativeCall<'a>,
    flags: c_int,
    bit: c_int,
    name: &str,
) -> Result<*const f64> {
    if flags & bit == 0 {
        return Ok(std::ptr::null());
    }
    call.find_input(name)
        .map(<[f64]>::as_ptr)
        .ok_or_else(|| Error::UnknownNativeParameter {
            function: call.function().to_string(),
            name: name.to_string(),
        })
}

impl Loaded {
    fn call(&self, call: &NativeCall<'_>) -> Result<NativeOutputs> {
        let function = call.function();
        let len = call.len();
        let api = &self.api;
        let c_function = CString::new(function).map_err(|_| Error::UnknownNativeParameter {
            function: function.to_string(),
            name: function.to_string(),
        })?;

        // SAFETY: every pointer handed to TA-Lib either comes from TA-Lib itself
        // or borrows a slice/buffer that outlives the TA_CallFunc below; buffers
        // are sized to `len`, the last index passed as endIdx is `len - 1`.
        unsafe {
            let mut handle: *const FuncHandle = std::ptr::null();
            check(function, (api.get_func_handle)(c_function.as_ptr(), &mut handle))?;
            let mut info: *const FuncInfo = std::ptr::null();
            check(function, (api.get_func_info)(handle, &mut info))?;
            let info = &*info;

            let mut holder: *mut ParamHolder = std::ptr::null_mut();
            check(function, (api.param_holder_alloc)(handle, &mut holder))?;
            let guard = HolderGuard { api, holder };

            for idx in 0..info.nb_input {
                let mut param: *const InputParameterInfo = std::ptr::null();
                check(function, (api.get_input_info)(handle, idx, &mut param))?;
                let param = &*param;
                match param.kind {
                    TA_INPUT_PRICE => {
                        let flags = param.flags;
                        let open = price_component(call, flags, TA_IN_PRICE_OPEN, "open")?;
                        let high = price_component(call, flags, TA_IN_PRICE_HIGH, "high")?;
                        let low = price_component(call, flags, TA_IN_PRICE_LOW, "low")?;
                        let close = price_component(call, flags, TA_IN_PRICE_CLOSE, "close")?;
                        let volume = price_component(call, flags, TA_IN_PRICE_VOLUME, "volume")?;
                        let oi = price_component(
                            call,
                            flags,
                            TA_IN_PRICE_OPENINTEREST,
                            "open_interest",
                        )?;
                        check(
                            function,
                            (api.set_input_price_ptr)(
                                guard.holder,
                                idx,
                                open,
                                high,
                                low,
                                close,
                                volume,
                                oi,
                            ),
                        )?;
                    }
                    TA_INPUT_REAL => {
                        let name = c_name(param.param_name);
                        let series = call.find_input(&name).ok_or_else(|| {
                            Error::UnknownNativeParameter {
                                function: function.to_string(),
                                name: name.clone(),
                            }
                        })?;
                        check(
                            function,
                            (api.set_input_real_ptr)(guard.holder, idx, series.as_ptr()),
                        )?;
                    }
                    _ => {
                        return Err(Error::UnknownNativeParameter {
                            function: function.to_string(),
                            name: c_name(param.param_name),
                        })
                    }
                }
            }

            let mut bound_options = 0;
            for idx in 0..info.nb_opt_input {
                let mut param: *const OptInputParameterInfo = std::ptr::null();
                check(function, (api.get_opt_input_info)(handle, idx, &mut param))?;
                let param = &*param;
                let name = c_name(param.param_name);
                let Some(value) = call.find_option(&name) else {
                    continue;
                };
                bound_options += 1;
                let is_real =
                    param.kind == TA_OPTINPUT_REAL_RANGE || param.kind == TA_OPTINPUT_REAL_LIST;
                let code = match (is_real, value) {
                    (true, OptValue::Real(v)) => (api.set_opt_real)(guard.holder, idx, v),
                    (true, OptValue::Integer(v)) => {
                        (api.set_opt_real)(guard.holder, idx, f64::from(v))
                    }
                    (false, OptValue::Integer(v)) => (api.set_opt_integer)(guard.holder, idx, v),
                    (false, OptValue::Real(v)) => {
                        (api.set_opt_integer)(guard.holder, idx, v.round() as c_int)
                    }
                };
                check(function, code)?;
            }
            if bound_options != call.options().len() {
                let known: Vec<String> = (0..info.nb_opt_input)
                    .filter_map(|idx| {
                        let mut param: *const OptInputParameterInfo = std::ptr::null();
                        ((api.get_opt_input_info)(handle, idx, &mut param) == TA_SUCCESS)
                            .then(|| super::normalize_name(&c_name((*param).param_name)))
                    })
                    .collect();
                let unmatched = call
                    .options()
                    .iter()
                    .find(|(n, _)| !known.contains(&super::normalize_name(n)))
                    .map_or_else(String::new, |(n, _)| (*n).to_string());
                return Err(Error::UnknownNativeParameter {
                    function: function.to_string(),
                    name: unmatched,
                });
            }

            let mut buffers: Vec<(String, Buffer)> = Vec::with_capacity(info.nb_output as usize);
            for idx in 0..info.nb_output {
                let mut param: *const OutputParameterInfo = std::ptr::null();
                check(function, (api.get_output_info)(handle, idx, &mut param))?;
                let param = &*param;
                let buffer = match param.kind {
                    TA_OUTPUT_REAL => Buffer::Real(nan_vec(len)),
                    TA_OUTPUT_INTEGER => Buffer::Integer(vec![0; len]),
                    _ => return Err(Error::unexpected_output(function, &c_name(param.param_name))),
                };
                buffers.push((c_name(param.param_name), buffer));
            }
            for (idx, (_, buffer)) in buffers.iter_mut().enumerate() {
                let code = match buffer {
                    Buffer::Real(v) => {
                        (api.set_output_real_ptr)(guard.holder, idx as c_uint, v.as_mut_ptr())
                    }
                    Buffer::Integer(v) => {
                        (api.set_output_integer_ptr)(guard.holder, idx as c_uint, v.as_mut_ptr())
                    }
                };
                check(function, code)?;
            }

            let end = c_int::try_from(len)
                .map_err(|_| Error::invalid("series too long for TA-Lib"))?
                - 1;
            let mut begin: c_int = 0;
            let mut count: c_int = 0;
            check(
                function,
                (api.call_func)(guard.holder, 0, end, &mut begin, &mut count),
            )?;
            drop(guard);

            debug!(function, len, begin, count, "TA-Lib call complete");
            let begin = usize::try_from(begin).unwrap_or(0);
            let count = usize::try_from(count).unwrap_or(0);

            let mut outputs = NativeOutputs::new(function);
            for (name, buffer) in buffers {
                let values = match buffer {
                    Buffer::Real(v) => {
                        OutputValues::Real(align(&v[..count.min(len)], begin, len, f64::NAN))
                    }
                    Buffer::Integer(v) => {
                        OutputValues::Integer(align(&v[..count.min(len)], begin, len, 0))
                    }
                };
                outputs.push(name, values);
            }
            Ok(outputs)
        }
    }
}

impl Engine for TaLib {
    fn is_available(&self) -> bool {
        self.loaded.is_some()
    }

    fn call(&self, call: &NativeCall<'_>) -> Result<NativeOutputs> {
        let loaded = self.loaded.as_ref().ok_or(Error::NotInstalled)?;
        if call.is_empty() {
            return Err(Error::invalid("Prices array cannot be empty"));
        }
        loaded.call(call)
    }
}
